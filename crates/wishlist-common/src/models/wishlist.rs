//! Wishlist model, as returned by `GET /wishlists/...`.
//!
//! Snapshots are immutable views: formatters read them, nothing writes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, ModelResult};

/// Measurement unit that gets pluralized ("1 piece" / "3 pieces").
pub const UNIT_PIECE: &str = "piece";

/// A wishlist as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistSnapshot {
    pub uuid: Uuid,

    pub owner_username: String,

    pub name: String,

    /// Creation timestamp. The backend does not always send one.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_archived: bool,

    #[serde(default)]
    pub items: Vec<WishlistItemSnapshot>,
}

impl WishlistSnapshot {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A single wishlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItemSnapshot {
    #[serde(default)]
    pub uuid: Uuid,

    #[serde(default)]
    pub wishlist_uuid: Uuid,

    pub name: String,

    pub quantity: i64,

    /// Free-form unit name ("piece", "kg", "l", ...).
    pub measurement_unit: String,

    /// Raw priority ordinal (0-3). Use [`WishlistItemSnapshot::priority`] for the typed value.
    pub priority: i64,

    #[serde(default)]
    pub is_purchased: bool,
}

impl WishlistItemSnapshot {
    /// Typed priority; fails for ordinals the schema does not define.
    pub fn priority(&self) -> ModelResult<Priority> {
        Priority::try_from(self.priority)
    }

    pub fn is_counted_in_pieces(&self) -> bool {
        self.measurement_unit == UNIT_PIECE
    }
}

/// Item priority levels published by the backend schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Priority {
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    pub fn ordinal(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for Priority {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            other => Err(ModelError::UnrecognizedPriority(other)),
        }
    }
}
