//! h1wire - HTTP/1.1 message serializer
//!
//! Builds byte-exact HTTP/1.1 requests and responses from structured
//! fields. Transport, parsing and connection handling belong to the caller.

pub mod config;
pub mod http;
