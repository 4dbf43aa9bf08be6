//! # Wishlist View
//!
//! Display strings for wishlist screens, computed from backend snapshots.
//!
//! Every formatter is a pure function of an optional snapshot: no snapshot
//! (still loading, not found) yields an empty string rather than an error.
//! [`reactive::derive`] recomputes a formatter whenever its source changes.

pub mod error;
pub mod info;
pub mod item_styles;
pub mod locale;
pub mod reactive;

pub use error::{FormatError, FormatResult};
pub use info::WishlistInfo;
pub use item_styles::WishlistItemStyles;
pub use locale::{DateFormatter, DateStyle, LocaleDateFormatter};
