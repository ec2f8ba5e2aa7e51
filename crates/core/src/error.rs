//! Shared error plumbing.
//!
//! Store implementations surface infrastructure failures as [`StoreError`];
//! services convert those into their own step-specific error kinds and never
//! swallow them. Deterministic business failures belong to the service error
//! enums, not here.

use thiserror::Error;

/// Result type used by store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Infrastructure failure surfaced by a store implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or the operation did not complete.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A storage-level constraint rejected the write.
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// A record the operation relies on does not exist in the store.
    #[error("record missing: {0}")]
    Missing(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    pub fn missing(msg: impl Into<String>) -> Self {
        Self::Missing(msg.into())
    }
}

/// An identifier failed to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier: {0}")]
pub struct InvalidId(pub String);
