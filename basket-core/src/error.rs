//! Filtering error types.
//!
//! Every failure mode has a named variant. Empty inputs are not failures.

use thiserror::Error;

use crate::item::ItemId;

#[derive(Debug, Error)]
pub enum BasketError {
    #[error("Cannot build {requested} recommendations from {available} distinct candidates")]
    InsufficientCandidates { requested: usize, available: usize },

    #[error("No category found for item {0}")]
    MissingCategory(ItemId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Stage {stage} failed: {reason}")]
    StageFailed { stage: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for filtering operations.
pub type BasketResult<T> = Result<T, BasketError>;
