use bytes::{BufMut, Bytes, BytesMut};

use crate::http::headers::{self, HeaderMap};
use crate::http::status::StatusCode;
use crate::http::writer::WireMessage;
use crate::http::HTTP_VERSION;

/// Accumulates the parts of an HTTP/1.1 response and renders them as wire
/// bytes.
///
/// A `Connection` header is set once at construction: `Keep-Alive` or
/// `Close`. It behaves like any other header afterwards and can be replaced
/// with [`add_head_value`](Self::add_head_value).
///
/// # Example
///
/// ```
/// # use h1wire::http::response::ResponseSerializer;
/// # use h1wire::http::status::StatusCode;
/// let mut resp = ResponseSerializer::new(StatusCode::NOT_FOUND, false);
/// resp.set_content_type("text/plain").set_body("gone");
///
/// assert_eq!(
///     resp.get_result(),
///     "HTTP/1.1 404 Not Found\r\nConnection: Close\r\nContent-Length: 4\r\nContent-Type: text/plain\r\n\r\ngone"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ResponseSerializer {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ResponseSerializer {
    pub fn new(status: StatusCode, keep_alive: bool) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            headers::CONNECTION,
            if keep_alive { "Keep-Alive" } else { "Close" },
        );

        Self {
            status,
            headers,
            body: Bytes::new(),
        }
    }

    pub fn set_status(&mut self, status: impl Into<StatusCode>) -> &mut Self {
        self.status = status.into();
        self
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) -> &mut Self {
        self.add_head_value(headers::CONTENT_TYPE, content_type)
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

    /// Stores the body and sets `Content-Length` to its size in bytes.
    pub fn set_body(&mut self, body: impl Into<Bytes>) -> &mut Self {
        self.body = body.into();
        self.headers
            .insert(headers::CONTENT_LENGTH, self.body.len().to_string());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Renders the status line, headers, blank line and body.
    ///
    /// Codes missing from the reason table are written with
    /// [`UNKNOWN_REASON`](crate::http::status::UNKNOWN_REASON).
    pub fn get_result(&self) -> Bytes {
        let reason = self.status.reason_phrase();
        let code = self.status.as_u16().to_string();
        let mut buf = BytesMut::with_capacity(
            HTTP_VERSION.len()
                + code.len()
                + reason.len()
                + self.headers.encoded_len()
                + self.body.len()
                + 6,
        );

        // Status line
        buf.put_slice(HTTP_VERSION.as_bytes());
        buf.put_u8(b' ');
        buf.put_slice(code.as_bytes());
        buf.put_u8(b' ');
        buf.put_slice(reason.as_bytes());
        buf.put_slice(b"\r\n");

        self.headers.write_to(&mut buf);

        // Header/body separator
        buf.put_slice(b"\r\n");

        if !self.body.is_empty() {
            buf.put_slice(&self.body);
        }

        tracing::trace!(
            status = self.status.as_u16(),
            known = self.status.is_known(),
            headers = self.headers.len(),
            body_len = self.body.len(),
            "Serialized response"
        );

        buf.freeze()
    }
}

impl Default for ResponseSerializer {
    fn default() -> Self {
        Self::new(StatusCode::OK, true)
    }
}

impl WireMessage for ResponseSerializer {
    fn get_result(&self) -> Bytes {
        ResponseSerializer::get_result(self)
    }
}
