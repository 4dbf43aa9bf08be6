//! Token endpoint.

use wishlist_common::models::AccessToken;

use crate::client::NamedClient;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a NamedClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a NamedClient) -> Self {
        Self { client }
    }

    /// Exchange username and password for a bearer token (OAuth2 password form).
    ///
    /// `POST /login`
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken> {
        self.client
            .post_form("/login", &[("username", username), ("password", password)])
            .await
    }
}
