//! Credential access and the in-process session store.
//!
//! The registry never owns a credential: it holds a [`CredentialSource`] and
//! asks it for the current token on every dispatch, so login, logout and
//! refresh are observed without rebuilding anything.

use std::sync::{PoisonError, RwLock};

use tracing::{debug, info};
use wishlist_common::models::SessionUser;

use crate::api::{AuthApi, UsersApi};
use crate::client::NamedClient;
use crate::error::Result;

/// Read access to the current bearer token.
pub trait CredentialSource: Send + Sync {
    /// The token to send right now, or `None` when signed out.
    fn current(&self) -> Option<String>;
}

impl<F> CredentialSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn current(&self) -> Option<String> {
        self()
    }
}

/// Credentials and user data for the signed-in session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user: Option<SessionUser>,
}

/// Thread-safe session store. Owns the login/logout/refresh lifecycle;
/// clients only read from it.
#[derive(Debug, Default)]
pub struct SessionStore {
    session: RwLock<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts signed in with `token` (e.g. from `WISHLIST_TOKEN`).
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_credential(token);
        store
    }

    pub fn set_credential(&self, token: impl Into<String>) {
        self.write().access_token = Some(token.into());
        debug!("session credential set");
    }

    /// Replace the token after a refresh, keeping the user data.
    pub fn rotate(&self, token: impl Into<String>) {
        self.write().access_token = Some(token.into());
        debug!("session credential rotated");
    }

    pub fn set_user(&self, user: SessionUser) {
        self.write().user = Some(user);
    }

    /// Log out: drop token and user data.
    pub fn clear(&self) {
        *self.write() = Session::default();
        info!("session cleared");
    }

    pub fn session_data(&self) -> Option<SessionUser> {
        self.read().user.clone()
    }

    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().access_token.is_some()
    }

    /// Exchange username/password for a token through `client`, store it,
    /// then load the user behind it.
    ///
    /// `client` must read its credential from this store for the `/users/me`
    /// call to be authenticated.
    pub async fn login_with(
        &self,
        client: &NamedClient,
        username: &str,
        password: &str,
    ) -> Result<SessionUser> {
        let token = AuthApi::new(client).login(username, password).await?;
        self.set_credential(token.access_token);

        let user = UsersApi::new(client).me().await?;
        self.set_user(user.clone());
        info!(username = %user.username, client = client.name(), "logged in");
        Ok(user)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialSource for SessionStore {
    fn current(&self) -> Option<String> {
        self.read().access_token.clone()
    }
}
