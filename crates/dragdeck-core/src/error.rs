//! Error types shared by the reorder, snap and board engines.

use thiserror::Error;

/// Errors produced by core operations.
///
/// Every operation is pure, so a returned error means the input snapshot
/// is still the current one and the attempted mutation can be discarded.
#[derive(Debug, Error)]
pub enum DeckError {
    /// An index fell outside the list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A configuration value was rejected (e.g. non-positive cell size).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The dragged card is not on the board.
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// The drop target resolves to no column.
    #[error("container not found: {id}")]
    ContainerNotFound { id: String },

    /// A list item, grid item or tab id is unknown.
    #[error("item not found: {id}")]
    ItemNotFound { id: String },

    /// Two entries share an id.
    #[error("duplicate id: {id}")]
    DuplicateId { id: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, DeckError>;
