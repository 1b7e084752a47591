//! Error types for the state library.

use thiserror::Error;

use crate::account::AccountId;

/// Errors that can occur in settings and account registry operations.
///
/// None of these are fatal to the hosting process: a corrupt document is
/// recoverable by substituting defaults, an unknown account aborts the
/// operation with state unchanged, and a failed write leaves the in-memory
/// aggregate as the source of truth until the next successful save.
#[derive(Debug, Error)]
pub enum Error {
    /// Persisted state exists but cannot be parsed into the expected shape.
    #[error("corrupt state document: {0}")]
    CorruptState(#[from] serde_json::Error),

    /// Operation referenced an account that is not in the registry.
    #[error("unknown account: {0}")]
    UnknownAccount(AccountId),

    /// Reading the state document failed.
    #[error("failed to read state document: {0}")]
    StorageRead(#[source] std::io::Error),

    /// Writing the state document failed.
    #[error("failed to write state document: {0}")]
    StorageWrite(#[source] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
