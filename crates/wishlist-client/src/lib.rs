//! Authenticated client registry for the wishlist backend.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wishlist_client::{ClientRegistry, ReqwestTransport, SessionStore, api::WishlistsApi};
//!
//! #[tokio::main]
//! async fn main() -> wishlist_client::Result<()> {
//!     let config = wishlist_common::config::init().expect("config");
//!     let session = Arc::new(SessionStore::with_token("my-token"));
//!     let transport = Arc::new(ReqwestTransport::new(&config.origin)?);
//!
//!     let registry = ClientRegistry::build(config.clients.clone(), session, transport);
//!     let backend = registry.client("backend")?;
//!
//!     for wishlist in WishlistsApi::new(backend).list_mine().await? {
//!         println!("{}", wishlist.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod credential;
pub mod error;
pub mod interceptor;
pub mod registry;
pub mod request;
pub mod schema;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::NamedClient;
pub use credential::{CredentialSource, Session, SessionStore};
pub use error::{ClientError, Result};
pub use interceptor::AuthInterceptor;
pub use registry::ClientRegistry;
pub use request::{ApiRequest, ApiResponse, OnRequest, RequestBase, RequestBody, RequestContext};
pub use schema::{Operation, SchemaDocument};
pub use transport::{ReqwestTransport, Transport};
