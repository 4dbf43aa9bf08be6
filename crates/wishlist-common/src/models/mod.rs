//! Read-only snapshots of data returned by the wishlist backend.
//!
//! Field names follow the backend's JSON schema (snake_case).

pub mod user;
pub mod wishlist;

pub use user::*;
pub use wishlist::*;
