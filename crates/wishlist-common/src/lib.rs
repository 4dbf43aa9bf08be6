//! # wishlist-common
//!
//! Configuration, error primitives, and the server data models shared by the
//! client registry, the view helpers, and the CLI.
//! No I/O beyond loading configuration lives here.

pub mod config;
pub mod error;
pub mod models;
