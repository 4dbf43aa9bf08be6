//! Transports put requests on the wire.
//!
//! Named clients are written against [`Transport`] only. [`ReqwestTransport`]
//! is the production implementation; tests substitute recording fakes.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;
use wishlist_common::config::ClientConfig;

use crate::error::{ClientError, Result};
use crate::request::{ApiRequest, ApiResponse, RequestBase, RequestBody};

/// Sends one request for one client configuration.
///
/// Implementations own timeouts and error mapping; callers get their result
/// back unmodified.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, config: &ClientConfig, request: ApiRequest) -> Result<ApiResponse>;
}

/// `reqwest`-backed transport sharing one connection pool across all clients.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
    origin: Url,
}

impl ReqwestTransport {
    /// `origin` is what relative client addresses such as `/api` resolve against.
    pub fn new(origin: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("wishlist-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(http, origin)
    }

    pub fn with_client(http: Client, origin: &str) -> Result<Self> {
        Ok(Self {
            http,
            origin: Url::parse(origin)?,
        })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Full URL for `request` sent through a client configured with `config`.
    pub fn resolve(&self, config: &ClientConfig, request: &ApiRequest) -> Result<Url> {
        if is_absolute(&request.path) {
            return Ok(Url::parse(&request.path)?);
        }

        let base = match request.base {
            RequestBase::Client => self.origin.join(&config.base_url)?,
            RequestBase::Origin => self.origin.clone(),
        };
        if request.path.is_empty() {
            return Ok(base);
        }

        let base = base.as_str().trim_end_matches('/');
        let path = request.path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn dispatch(&self, config: &ClientConfig, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.resolve(config, &request)?;

        // Client defaults first; request headers win on conflicts.
        let mut headers = config_headers(config)?;
        headers.extend(request.headers);

        debug!(method = %request.method, %url, "sending request");
        let mut builder = self.http.request(request.method, url).headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(body),
            RequestBody::Form(pairs) => builder.form(pairs),
        };
        if let Some(timeout) = request.timeout.or_else(|| config.timeout()) {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        if !status.is_success() {
            let message = error_message(&body, status);
            warn!(status = status.as_u16(), %message, "request failed");
            return Err(ClientError::Api { status: status.as_u16(), message });
        }

        Ok(ApiResponse { status, headers, body })
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

fn config_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(config.headers.len());
    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

/// Pull a readable message out of an error body (`detail`, `error` or `message`).
fn error_message(body: &[u8], status: StatusCode) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| {
            ["detail", "error", "message"]
                .iter()
                .find_map(|key| v.get(key).cloned())
        })
        .map(|v| match v {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .unwrap_or_else(|| status.to_string())
}
