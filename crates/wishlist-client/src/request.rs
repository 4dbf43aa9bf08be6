//! Request and response values passed between named clients and transports.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Caller-supplied pre-send hook. Runs once per dispatch, after the
/// Authorization header has been attached.
pub type OnRequest = Arc<dyn Fn(&mut RequestContext<'_>) -> Result<()> + Send + Sync>;

/// What an [`OnRequest`] hook sees: the dispatching client and the outgoing request.
pub struct RequestContext<'a> {
    pub client: &'a str,
    pub request: &'a mut ApiRequest,
}

/// What a relative [`ApiRequest::path`] is joined to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestBase {
    /// The client's configured base URL.
    #[default]
    Client,
    /// The application origin, ignoring the client's base path.
    Origin,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
}

/// One outgoing request, relative to a named client's base URL.
///
/// ```rust
/// use wishlist_client::ApiRequest;
///
/// let req = ApiRequest::get("/wishlists/user/alice").query("archived", "false");
/// assert_eq!(req.path, "/wishlists/user/alice");
/// ```
#[derive(Clone, Default)]
pub struct ApiRequest {
    pub method: Method,
    /// Path joined to the client's base URL; absolute `http(s)://` URLs are used as-is.
    pub path: String,
    pub base: RequestBase,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: RequestBody,
    /// Overrides the client's configured timeout for this request only.
    pub timeout: Option<Duration>,
    pub on_request: Option<OnRequest>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Resolve `path` against the application origin instead of the client's base URL.
    pub fn from_origin(mut self) -> Self {
        self.base = RequestBase::Origin;
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Like [`ApiRequest::header`] for string input; fails on invalid names or values.
    pub fn try_header(self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
        Ok(self.header(name, value))
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn form<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.body = RequestBody::Form(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a pre-send hook. See [`OnRequest`].
    pub fn on_request<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut RequestContext<'_>) -> Result<()> + Send + Sync + 'static,
    {
        self.on_request = Some(Arc::new(hook));
        self
    }

    /// Header value as a string, if present and visible ASCII.
    pub fn header_str(&self, name: impl reqwest::header::AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("base", &self.base)
            .field("query", &self.query)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .field("timeout", &self.timeout)
            .field("on_request", &self.on_request.is_some())
            .finish()
    }
}

/// A completed response. Transports only return 2xx responses as `Ok`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Decode the body; an empty body decodes as JSON `null` (e.g. `204 No Content`).
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if self.body.is_empty() {
            return serde_json::from_value(Value::Null).map_err(ClientError::Json);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::ACCEPT;

    #[test]
    fn builder_collects_parts() {
        let req = ApiRequest::post("/login")
            .query("next", "/wishlists")
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form([("username", "alice"), ("password", "secret")])
            .timeout(Duration::from_secs(5));

        assert_eq!(req.method, Method::POST);
        assert_eq!(req.query, vec![("next".to_owned(), "/wishlists".to_owned())]);
        assert_eq!(req.header_str(ACCEPT), Some("application/json"));
        assert_eq!(
            req.body,
            RequestBody::Form(vec![
                ("username".to_owned(), "alice".to_owned()),
                ("password".to_owned(), "secret".to_owned()),
            ])
        );
        assert_eq!(req.timeout, Some(Duration::from_secs(5)));
        assert!(req.on_request.is_none());
    }

    #[test]
    fn try_header_rejects_invalid_values() {
        assert!(ApiRequest::get("/").try_header("x-ok", "fine").is_ok());
        let err = ApiRequest::get("/").try_header("x-bad", "line\nbreak").unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader(_)));
    }

    #[test]
    fn empty_body_decodes_as_null() {
        let resp = ApiResponse::new(StatusCode::NO_CONTENT, Bytes::new());
        let value: Option<Value> = resp.json().unwrap();
        assert!(value.is_none());

        let resp = ApiResponse::new(StatusCode::OK, r#"{"a":1}"#);
        let value: Value = resp.json().unwrap();
        assert_eq!(value["a"], 1);
    }
}
