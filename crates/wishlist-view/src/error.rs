//! Formatter errors.

use wishlist_common::error::ModelError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The item carries a priority ordinal with no label or color.
    #[error("Unrecognized priority: {0}")]
    UnrecognizedPriority(i64),
}

impl From<ModelError> for FormatError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnrecognizedPriority(p) => Self::UnrecognizedPriority(p),
        }
    }
}

pub type FormatResult<T> = Result<T, FormatError>;
