//! HTTP/1.1 message serialization.
//!
//! This module turns field-by-field descriptions of requests and responses
//! into the exact bytes to put on the wire. It never reads from or connects
//! to anything; the caller owns the transport.
//!
//! # Architecture
//!
//! - **`query`**: Builds `key=value&...` query strings from ordered pairs
//! - **`headers`**: Sorted header map shared by both serializers
//! - **`request`**: Request methods and the request serializer
//! - **`response`**: The response serializer
//! - **`status`**: Status codes and their reason phrases
//! - **`writer`**: Writes finished messages to an async transport
//!
//! # Wire layout
//!
//! ```text
//! <METHOD> <url>[?<query>] HTTP/1.1\r\n      HTTP/1.1 <code> <reason>\r\n
//! <Field>: <Value>\r\n                       <Field>: <Value>\r\n
//! ...                                        ...
//! \r\n                                       \r\n
//! <body>                                     <body>
//! ```
//!
//! Header lines are ordered by field name, not by the order they were set.
//!
//! # Example
//!
//! ```
//! use h1wire::http::query::QueryParameterBuilder;
//! use h1wire::http::request::{Method, RequestSerializer};
//!
//! let mut query = QueryParameterBuilder::new();
//! query.add("q", "rust").add("page", "2");
//!
//! let mut req = RequestSerializer::new();
//! req.set_method(Method::GET)
//!     .set_url("/search")
//!     .set_query(query.get_result())
//!     .set_host("example.com");
//!
//! assert_eq!(
//!     req.get_result(),
//!     "GET /search?q=rust&page=2 HTTP/1.1\r\nHost: example.com\r\n\r\n"
//! );
//! ```

pub mod headers;
pub mod query;
pub mod request;
pub mod response;
pub mod status;
pub mod writer;

pub use headers::HeaderMap;
pub use query::QueryParameterBuilder;
pub use request::{Method, RequestSerializer};
pub use response::ResponseSerializer;
pub use status::StatusCode;
pub use writer::{MessageWriter, WireMessage};

const HTTP_VERSION: &str = "HTTP/1.1";
