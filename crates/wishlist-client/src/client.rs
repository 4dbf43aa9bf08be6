//! Named clients: one backend API surface bound to its configuration and
//! the registry's shared interceptor and transport.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use wishlist_common::config::ClientConfig;

use crate::error::Result;
use crate::interceptor::AuthInterceptor;
use crate::request::{ApiRequest, ApiResponse, RequestContext};
use crate::transport::Transport;

/// A dispatcher for one named client. Cheap to clone; clones share everything.
#[derive(Clone)]
pub struct NamedClient {
    name: Arc<str>,
    config: Arc<ClientConfig>,
    interceptor: AuthInterceptor,
    transport: Arc<dyn Transport>,
}

impl NamedClient {
    pub fn new(
        name: impl Into<Arc<str>>,
        config: ClientConfig,
        interceptor: AuthInterceptor,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            interceptor,
            transport,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request.
    ///
    /// The credential is read at this moment, the Authorization header is
    /// attached, then the request's own `on_request` hook (if any) runs once
    /// on the result. Transport errors are returned unchanged. Dropping the
    /// returned future abandons this request only.
    ///
    /// The only error added here is `InvalidHeader`, for a credential that
    /// cannot be sent as a header value; the transport is not called then.
    pub async fn dispatch(&self, mut request: ApiRequest) -> Result<ApiResponse> {
        let hook = request.on_request.take();

        self.interceptor.apply(&mut request)?;

        if let Some(hook) = hook {
            let mut ctx = RequestContext {
                client: &self.name,
                request: &mut request,
            };
            hook(&mut ctx)?;
        }

        debug!(client = %self.name, method = %request.method, path = %request.path, "dispatch");
        self.transport.dispatch(&self.config, request).await
    }

    // ── Typed helpers ─────────────────────────────────────────────────────────

    /// Dispatch and decode the JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        self.dispatch(request).await?.json()
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(ApiRequest::get(path)).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(ApiRequest::post(path).json(body)?).await
    }

    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&str, &str)],
    ) -> Result<T> {
        self.send_json(ApiRequest::post(path).form(pairs.iter().copied()))
            .await
    }
}

impl fmt::Debug for NamedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedClient")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
