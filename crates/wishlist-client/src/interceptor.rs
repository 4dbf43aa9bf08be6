//! The shared request interceptor. Attaches the session's bearer credential.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::debug;

use crate::credential::CredentialSource;
use crate::error::{ClientError, Result};
use crate::request::ApiRequest;

/// One interceptor instance is shared by every client in a registry.
#[derive(Clone)]
pub struct AuthInterceptor {
    credentials: Arc<dyn CredentialSource>,
}

impl AuthInterceptor {
    pub fn new(credentials: Arc<dyn CredentialSource>) -> Self {
        Self { credentials }
    }

    /// Attach `Authorization: Bearer <token>` using the token current right now.
    ///
    /// Other headers are kept; a caller-supplied Authorization is replaced.
    /// When signed out the header is still sent as `Bearer ` with an empty
    /// token, matching what the web client has always sent.
    pub fn apply(&self, request: &mut ApiRequest) -> Result<()> {
        let token = self.credentials.current();
        if token.is_none() {
            debug!(path = %request.path, "no session credential, sending empty bearer token");
        }

        let bearer = bearer_value(token.as_deref().unwrap_or_default())?;
        request.headers.insert(AUTHORIZATION, bearer);
        Ok(())
    }
}

impl fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthInterceptor").finish_non_exhaustive()
    }
}

fn bearer_value(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| ClientError::InvalidHeader("credential is not a valid header value".into()))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{ACCEPT, HeaderValue};

    fn interceptor(token: Option<&'static str>) -> AuthInterceptor {
        AuthInterceptor::new(Arc::new(move || token.map(str::to_owned)))
    }

    #[test]
    fn attaches_bearer_and_keeps_other_headers() {
        let mut req = ApiRequest::get("/wishlists/")
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        interceptor(Some("abc")).apply(&mut req).unwrap();

        assert_eq!(req.header_str(AUTHORIZATION), Some("Bearer abc"));
        assert_eq!(req.header_str(ACCEPT), Some("application/json"));
    }

    #[test]
    fn absent_credential_sends_empty_bearer() {
        let mut req = ApiRequest::get("/wishlists/");
        interceptor(None).apply(&mut req).unwrap();
        assert_eq!(req.header_str(AUTHORIZATION), Some("Bearer "));
    }

    #[test]
    fn replaces_caller_authorization() {
        let mut req = ApiRequest::get("/")
            .header(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        interceptor(Some("abc")).apply(&mut req).unwrap();
        assert_eq!(req.headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(req.header_str(AUTHORIZATION), Some("Bearer abc"));
    }

    #[test]
    fn rejects_token_with_control_characters() {
        let mut req = ApiRequest::get("/");
        let err = interceptor(Some("bad\ntoken")).apply(&mut req).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader(_)));
    }
}
