//! Error types for aclstore
//!
//! Two layers:
//! - [`StoreError`]: what a [`KvStore`](crate::KvStore) implementation reports.
//!   `NotFound` is kept distinguishable so the adapter can turn it into an
//!   empty set.
//! - [`Error`]: what callers of the adapter and backend see.

use thiserror::Error;

/// Errors reported by an underlying key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key does not exist
    #[error("key not found: {key}")]
    NotFound {
        /// The missing storage key
        key: String,
    },

    /// The store failed for a reason of its own (corruption, closed handle, ...)
    #[error("backend error: {0}")]
    Backend(String),

    /// I/O failure inside the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Build a `NotFound` for the given key
    pub fn not_found(key: impl Into<String>) -> Self {
        StoreError::NotFound { key: key.into() }
    }

    /// Check if this is the "key absent" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store primitives
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// All aclstore errors
#[derive(Debug, Error)]
pub enum Error {
    /// Failure of the underlying store, carried verbatim
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A member value cannot be represented by the configured codec
    #[error("invalid value {value:?}: {reason}")]
    InvalidValue {
        /// The offending member
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A stored record could not be decoded
    #[error("codec error at {key}: {message}")]
    Codec {
        /// Storage key of the record
        key: String,
        /// Decoder message
        message: String,
    },

    /// Invalid configuration
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for aclstore operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this wraps a store `NotFound`.
    ///
    /// The adapter normalizes `NotFound` on reads, so this only shows up
    /// when a store reports it from `put` or `delete`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(e) if e.is_not_found())
    }

    /// Check if this came from the underlying store
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Store(StoreError::Io(e))
    }
}
