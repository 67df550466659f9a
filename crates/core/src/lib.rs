//! Core types for aclstore
//!
//! This crate defines the vocabulary shared by the storage and engine layers:
//! - [`StorageKey`]: the composed `prefix_bucket@key` address of a record
//! - [`ValueSet`]: ordered, de-duplicated member set stored at a key
//! - [`ValueCodec`]: on-disk encoding of a [`ValueSet`]
//! - [`AclConfig`]: prefix and codec selection
//! - [`KvStore`]: the async get/put/delete contract of the underlying store
//! - [`Error`] / [`StoreError`]: error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;
pub mod value_set;

pub use codec::{ValueCodec, DELIMITER, LENGTH_PREFIXED_VERSION};
pub use config::{AclConfig, DEFAULT_PREFIX};
pub use error::{Error, Result, StoreError, StoreResult};
pub use traits::KvStore;
pub use types::{KeyList, StorageKey};
pub use value_set::ValueSet;
