//! `/wishlists` queries.

use uuid::Uuid;
use wishlist_common::models::WishlistSnapshot;

use crate::client::NamedClient;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct WishlistsApi<'a> {
    client: &'a NamedClient,
}

impl<'a> WishlistsApi<'a> {
    pub fn new(client: &'a NamedClient) -> Self {
        Self { client }
    }

    /// Wishlists owned by the signed-in user.
    ///
    /// `GET /wishlists/`
    pub async fn list_mine(&self) -> Result<Vec<WishlistSnapshot>> {
        self.client.get_json("/wishlists/").await
    }

    /// `GET /wishlists/{uuid}`
    pub async fn get(&self, uuid: Uuid) -> Result<WishlistSnapshot> {
        self.client.get_json(&format!("/wishlists/{uuid}")).await
    }

    /// `GET /wishlists/user/{username}`
    pub async fn list_for_user(&self, username: &str) -> Result<Vec<WishlistSnapshot>> {
        self.client
            .get_json(&format!("/wishlists/user/{}", encode_segment(username)))
            .await
    }
}

/// Percent-encode one path segment.
pub(crate) fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
