//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted while loading the question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank could not be loaded: {0}")]
    LoadFailure(#[from] StorageError),
}

/// Errors emitted when starting a quiz session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for topic {topic:?}")]
    EmptySelection { topic: String },
}
