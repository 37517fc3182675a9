//! # Store Error Types
//!
//! Error types for document persistence and the services built on it.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Error Propagation                             │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds the persistence-failed framing     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Caller maps to a classified response (404 / 400 / 500)             │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Persistence` error is the only condition under which an accepted
//! mutation may be lost; the store never commits in-memory state it failed
//! to flush, so callers can treat it strictly as "operation did not take
//! effect".

use thiserror::Error;

use brew_core::CoreError;

/// Store and service operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A business rule rejected the operation (not found, insufficient
    /// stock, validation failure).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The document could not be read from or written to disk.
    ///
    /// ## When This Occurs
    /// - Data directory missing or not writable
    /// - Disk full
    /// - File permissions issue
    #[error("Persistence failed: {0}")]
    Persistence(#[source] std::io::Error),

    /// The on-disk document exists but is not valid JSON.
    ///
    /// The store refuses to open rather than silently replacing the document
    /// with an empty one, so the operator can recover the file.
    #[error("Document is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

impl From<brew_core::ValidationError> for StoreError {
    fn from(err: brew_core::ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
