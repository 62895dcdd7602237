//! Error types for the harmonize engine.
//!
//! Lookup and expansion misses are `Option`, never errors. Errors here cover
//! persistence and invalid caller input only.

mod store_error;

pub use store_error::StoreError;

/// Top-level error for all harmonize operations.
#[derive(Debug, thiserror::Error)]
pub enum HarmonizeError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("embedding provider failed: {reason}")]
    Embedding { reason: String },
}

/// Convenience alias used across the workspace.
pub type HarmonizeResult<T> = Result<T, HarmonizeError>;
