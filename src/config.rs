//! YAML message descriptions.
//!
//! A config file lists messages to serialize. Each entry is replayed through
//! [`RequestSerializer`] or [`ResponseSerializer`] in a fixed order, with
//! explicit `headers` applied last so they override derived ones such as
//! `Content-Length`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;
use serde::Deserialize;

use crate::http::query::QueryParameterBuilder;
use crate::http::request::{Method, RequestSerializer};
use crate::http::response::ResponseSerializer;
use crate::http::status::StatusCode;

/// Environment variable naming the message file for [`Config::load`].
pub const MESSAGES_ENV: &str = "H1WIRE_MESSAGES";

const DEFAULT_MESSAGES_PATH: &str = "messages.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub messages: Vec<MessageConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessageConfig {
    Request(RequestConfig),
    Response(ResponseConfig),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub method: Option<String>,
    /// Absolute URL supplying Host, path and query.
    pub target: Option<String>,
    pub host: Option<String>,
    pub url: Option<String>,
    pub query: Vec<QueryParam>,
    pub raw_query: Option<String>,
    pub cookie: Option<String>,
    pub content_type: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryParam {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    pub status: u16,
    pub keep_alive: bool,
    pub content_type: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            keep_alive: true,
            content_type: None,
            headers: BTreeMap::new(),
            body: None,
        }
    }
}

impl Config {
    /// Loads the file named by `H1WIRE_MESSAGES`, or `messages.yaml`.
    pub fn load() -> Result<Self> {
        let path = std::env::var(MESSAGES_ENV)
            .unwrap_or_else(|_| DEFAULT_MESSAGES_PATH.to_string());
        Self::from_file(path)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Invalid message file {}", path.display()))
    }

    /// Parses and checks a YAML document.
    ///
    /// Every message is built once here so that bad methods or targets are
    /// reported at load time rather than halfway through writing output.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(content).context("Failed to parse YAML")?;

        for (index, message) in config.messages.iter().enumerate() {
            message
                .validate()
                .with_context(|| format!("message #{}", index + 1))?;
        }

        Ok(config)
    }
}

impl MessageConfig {
    /// Serializes the described message.
    pub fn serialize(&self) -> Result<Bytes> {
        match self {
            MessageConfig::Request(req) => Ok(req.build()?.get_result()),
            MessageConfig::Response(resp) => Ok(resp.build().get_result()),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            MessageConfig::Request(req) => req.build().map(|_| ()),
            MessageConfig::Response(_) => Ok(()),
        }
    }
}

impl RequestConfig {
    pub fn build(&self) -> Result<RequestSerializer> {
        let mut req = RequestSerializer::new();

        if let Some(method) = &self.method {
            let method = Method::from_str(method)
                .with_context(|| format!("Unsupported method {:?}", method))?;
            req.set_method(method);
        }

        if let Some(target) = &self.target {
            let target = url::Url::parse(target)
                .with_context(|| format!("Invalid target URL {:?}", target))?;
            req.set_target(&target);
        }

        if let Some(host) = &self.host {
            req.set_host(host.as_str());
        }

        if let Some(url) = &self.url {
            req.set_url(url.as_str());
        }

        match (&self.raw_query, self.query.is_empty()) {
            (Some(_), false) => {
                anyhow::bail!("`query` and `raw_query` cannot both be set");
            }
            (Some(raw), true) => {
                req.set_query(raw.as_str());
            }
            (None, false) => {
                let mut query = QueryParameterBuilder::new();
                for param in &self.query {
                    query.add(&param.key, &param.value);
                }
                req.set_query(query.get_result());
            }
            (None, true) => {}
        }

        if let Some(cookie) = &self.cookie {
            req.set_cookie(cookie.as_str());
        }

        if let Some(content_type) = &self.content_type {
            req.set_content_type(content_type.as_str());
        }

        if let Some(body) = &self.body {
            req.set_body(body.clone());
        }

        for (field, value) in &self.headers {
            req.add_head_value(field.as_str(), value.as_str());
        }

        Ok(req)
    }
}

impl ResponseConfig {
    pub fn build(&self) -> ResponseSerializer {
        let mut resp = ResponseSerializer::new(StatusCode::from_u16(self.status), self.keep_alive);

        if let Some(content_type) = &self.content_type {
            resp.set_content_type(content_type.as_str());
        }

        if let Some(body) = &self.body {
            resp.set_body(body.clone());
        }

        for (field, value) in &self.headers {
            resp.add_head_value(field.as_str(), value.as_str());
        }

        resp
    }
}
