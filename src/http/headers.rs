//! Header storage shared by the request and response serializers.
//!
//! Field names are kept in a sorted map, so the header section is always
//! emitted in byte-wise lexicographic order of the field names regardless of
//! the order in which they were set. Names are case-sensitive: `Host` and
//! `host` are two different entries.
//!
//! Values are stored and written verbatim. No validation or escaping happens
//! here.

use std::collections::BTreeMap;

use bytes::{BufMut, BytesMut};

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONNECTION: &str = "Connection";
pub const COOKIE: &str = "Cookie";
pub const HOST: &str = "Host";

/// Sorted, last-write-wins header map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: BTreeMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Sets `name` to `value`, replacing any previous value.
    ///
    /// Returns the replaced value, if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates `(name, value)` pairs in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of bytes [`write_to`](Self::write_to) will append.
    pub fn encoded_len(&self) -> usize {
        self.fields
            .iter()
            .map(|(k, v)| k.len() + v.len() + 4)
            .sum()
    }

    /// Appends one `Name: Value\r\n` line per entry.
    ///
    /// The blank line terminating the header section is not written here.
    pub fn write_to(&self, buf: &mut BytesMut) {
        for (name, value) in &self.fields {
            buf.put_slice(name.as_bytes());
            buf.put_slice(b": ");
            buf.put_slice(value.as_bytes());
            buf.put_slice(b"\r\n");
        }
    }
}

/// Logs an explicit `Content-Length` that disagrees with the stored body.
///
/// The declared value is always kept as given.
pub(crate) fn note_declared_length(field: &str, value: &str, body_len: usize) {
    if field != CONTENT_LENGTH {
        return;
    }

    if value.parse::<usize>().ok() != Some(body_len) {
        tracing::debug!(
            declared = value,
            body_len = body_len,
            "Content-Length overridden with a value that differs from the body length"
        );
    }
}
