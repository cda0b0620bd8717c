use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::http::headers::{self, HeaderMap};
use crate::http::writer::WireMessage;
use crate::http::HTTP_VERSION;

/// HTTP request methods the serializer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// HEAD - Like GET but without the response body
    HEAD,
    /// GET - Retrieve a resource
    #[default]
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
}

impl Method {
    /// Parses an HTTP method from its request-line token.
    ///
    /// # Arguments
    ///
    /// * `s` - Method token (case-sensitive, uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a known method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use h1wire::http::request::Method;
    /// assert_eq!(Method::from_str("PUT"), Some(Method::PUT));
    /// assert_eq!(Method::from_str("put"), None);
    /// assert_eq!(Method::from_str("PATCH"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "HEAD" => Some(Method::HEAD),
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    }

    /// The token written at the start of the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::HEAD => "HEAD",
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulates the parts of an HTTP/1.1 request and renders them as wire
/// bytes.
///
/// Setters may be called in any order and any number of times; each one
/// overwrites what was there. Nothing is validated or escaped.
///
/// # Example
///
/// ```
/// # use h1wire::http::request::{Method, RequestSerializer};
/// let mut req = RequestSerializer::new();
/// req.set_method(Method::POST)
///     .set_url("/submit")
///     .set_host("example.com")
///     .set_body("hi");
///
/// assert_eq!(
///     req.get_result(),
///     "POST /submit HTTP/1.1\r\nContent-Length: 2\r\nHost: example.com\r\n\r\nhi"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestSerializer {
    method: Method,
    url: String,
    query: String,
    headers: HeaderMap,
    body: Bytes,
}

impl RequestSerializer {
    /// Creates an empty `GET` request with no url, query, headers or body.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_method(&mut self, method: Method) -> &mut Self {
        self.method = method;
        self
    }

    pub fn set_host(&mut self, host: impl Into<String>) -> &mut Self {
        self.add_head_value(headers::HOST, host)
    }

    /// Stores the request path verbatim.
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    pub fn set_cookie(&mut self, cookie: impl Into<String>) -> &mut Self {
        self.add_head_value(headers::COOKIE, cookie)
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) -> &mut Self {
        self.add_head_value(headers::CONTENT_TYPE, content_type)
    }

    /// Stores a raw query string, written after `?` when non-empty.
    ///
    /// See [`QueryParameterBuilder`](crate::http::query::QueryParameterBuilder)
    /// for assembling one from pairs.
    pub fn set_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.query = query.into();
        self
    }

    /// Applies an absolute URL: `Host`, path and query.
    ///
    /// The port is only included in `Host` when the URL names a non-default
    /// one. URLs without a host (e.g. `data:`) leave `Host` untouched.
    pub fn set_target(&mut self, target: &url::Url) -> &mut Self {
        if let Some(host) = target.host_str() {
            let host_value = match target.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            };
            self.set_host(host_value);
        }

        self.url = target.path().to_string();
        self.query = target.query().unwrap_or_default().to_string();
        self
    }

    /// Stores the body and sets `Content-Length` to its size in bytes.
    pub fn set_body(&mut self, body: impl Into<Bytes>) -> &mut Self {
        self.body = body.into();
        self.headers
            .insert(headers::CONTENT_LENGTH, self.body.len().to_string());
        self
    }

    /// Sets or replaces an arbitrary header.
    pub fn add_head_value(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let field = field.into();
        let value = value.into();
        headers::note_declared_length(&field, &value, self.body.len());
        self.headers.insert(field, value);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Renders the request line, headers, blank line and body.
    pub fn get_result(&self) -> Bytes {
        let method = self.method.as_str();
        let mut buf = BytesMut::with_capacity(
            method.len()
                + self.url.len()
                + self.query.len()
                + HTTP_VERSION.len()
                + self.headers.encoded_len()
                + self.body.len()
                + 8,
        );

        // Request line
        buf.put_slice(method.as_bytes());
        buf.put_u8(b' ');
        buf.put_slice(self.url.as_bytes());
        if !self.query.is_empty() {
            buf.put_u8(b'?');
            buf.put_slice(self.query.as_bytes());
        }
        buf.put_u8(b' ');
        buf.put_slice(HTTP_VERSION.as_bytes());
        buf.put_slice(b"\r\n");

        self.headers.write_to(&mut buf);

        // Header/body separator
        buf.put_slice(b"\r\n");

        if !self.body.is_empty() {
            buf.put_slice(&self.body);
        }

        tracing::trace!(
            method = method,
            url = %self.url,
            headers = self.headers.len(),
            body_len = self.body.len(),
            "Serialized request"
        );

        buf.freeze()
    }
}

impl WireMessage for RequestSerializer {
    fn get_result(&self) -> Bytes {
        RequestSerializer::get_result(self)
    }
}
