//! Typed endpoint surface of the wishlist backend.
//!
//! Each API is a thin borrowed view over a [`NamedClient`](crate::NamedClient);
//! requests still go through the client's interceptor and transport.

pub mod auth;
pub mod users;
pub mod wishlists;

pub use auth::AuthApi;
pub use users::UsersApi;
pub use wishlists::WishlistsApi;
