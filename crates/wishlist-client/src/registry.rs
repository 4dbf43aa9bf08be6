//! The client registry: every configured backend, each behind the same
//! authentication interceptor.
//!
//! Built once at startup from the `clients` section of the configuration.
//! Nothing here enumerates client names: whatever the configuration declares
//! becomes a registry entry.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use tracing::info;
use wishlist_common::config::ClientConfig;

use crate::client::NamedClient;
use crate::credential::CredentialSource;
use crate::error::{ClientError, Result};
use crate::interceptor::AuthInterceptor;
use crate::transport::Transport;

static REGISTRY: OnceLock<ClientRegistry> = OnceLock::new();

/// Make `registry` the process-wide registry. Fails if one is already installed.
pub fn install(registry: ClientRegistry) -> Result<&'static ClientRegistry> {
    REGISTRY
        .set(registry)
        .map_err(|_| ClientError::AlreadyInstalled)?;
    REGISTRY.get().ok_or(ClientError::AlreadyInstalled)
}

/// The process-wide registry, if [`install`] has run.
pub fn global() -> Option<&'static ClientRegistry> {
    REGISTRY.get()
}

/// Immutable map of client name to dispatcher.
#[derive(Debug, Clone)]
pub struct ClientRegistry {
    clients: BTreeMap<String, NamedClient>,
}

impl ClientRegistry {
    /// One [`NamedClient`] per entry of `configs`, all sharing one
    /// [`AuthInterceptor`] over `credentials` and one `transport`.
    ///
    /// Never fails: an empty input gives an empty registry.
    pub fn build<N, I>(
        configs: I,
        credentials: Arc<dyn CredentialSource>,
        transport: Arc<dyn Transport>,
    ) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, ClientConfig)>,
    {
        let interceptor = AuthInterceptor::new(credentials);

        let clients: BTreeMap<String, NamedClient> = configs
            .into_iter()
            .map(|(name, config)| {
                let name = name.into();
                let client = NamedClient::new(
                    name.as_str(),
                    config,
                    interceptor.clone(),
                    Arc::clone(&transport),
                );
                (name, client)
            })
            .collect();

        info!(clients = ?clients.keys().collect::<Vec<_>>(), "client registry built");
        Self { clients }
    }

    pub fn get(&self, name: &str) -> Option<&NamedClient> {
        self.clients.get(name)
    }

    /// Like [`ClientRegistry::get`], failing with `UnknownClient`.
    pub fn client(&self, name: &str) -> Result<&NamedClient> {
        self.get(name)
            .ok_or_else(|| ClientError::UnknownClient(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clients.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NamedClient)> {
        self.clients.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
