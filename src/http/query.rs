/// Builds a query string from ordered `key=value` pairs.
///
/// Pairs are joined with `&` in the order they were added. Keys and values
/// are copied verbatim; callers must percent-encode reserved characters
/// themselves.
///
/// # Example
///
/// ```
/// # use h1wire::http::query::QueryParameterBuilder;
/// let mut query = QueryParameterBuilder::new();
/// query.add("a", "1").add("b", "2");
/// assert_eq!(query.get_result(), "a=1&b=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameterBuilder {
    raw: String,
}

impl QueryParameterBuilder {
    pub fn new() -> Self {
        Self { raw: String::new() }
    }

    /// Appends `key=value`, preceded by `&` if anything was added before.
    pub fn add(&mut self, key: &str, value: &str) -> &mut Self {
        if !self.raw.is_empty() {
            self.raw.push('&');
        }

        self.raw.push_str(key);
        self.raw.push('=');
        self.raw.push_str(value);
        self
    }

    /// Returns the accumulated query string. Does not reset the builder.
    pub fn get_result(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
