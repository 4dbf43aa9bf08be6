//! `/users` queries.

use wishlist_common::models::SessionUser;

use crate::api::wishlists::encode_segment;
use crate::client::NamedClient;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a NamedClient,
}

impl<'a> UsersApi<'a> {
    pub fn new(client: &'a NamedClient) -> Self {
        Self { client }
    }

    /// The user the current credential belongs to.
    ///
    /// `GET /users/me`
    pub async fn me(&self) -> Result<SessionUser> {
        self.client.get_json("/users/me").await
    }

    /// `GET /users/{username}`
    pub async fn get(&self, username: &str) -> Result<SessionUser> {
        self.client
            .get_json(&format!("/users/{}", encode_segment(username)))
            .await
    }
}
