//! Error types for model conversions.

/// Errors raised when server data violates the backend's enumerated contracts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A priority outside the `0..=3` range published by the schema.
    #[error("Unrecognized priority: {0}")]
    UnrecognizedPriority(i64),
}

/// Convenience type alias for Results using ModelError.
pub type ModelResult<T> = Result<T, ModelError>;
