//! # aclstore
//!
//! Access-control-list relations persisted on an ordered key-value store.
//!
//! A relation is a set of members stored under `(bucket, key)`, e.g. the
//! permissions of role `admin` in bucket `role`. Reads go straight to the
//! store; mutations are queued on an [`OperationBatch`] and flushed in order
//! by [`AclBackend::end`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use aclstore::prelude::*;
//!
//! let acl = AclBuilder::new().open_memory();
//!
//! let mut batch = acl.begin();
//! acl.add(&mut batch, "role", "admin", ["read", "write"]);
//! acl.end(batch).await?;
//!
//! assert_eq!(acl.get("role", "admin").await?, ["read", "write"]);
//! ```
//!
//! ## Batches are not transactions
//!
//! A flush runs each queued operation after the previous one completed and
//! stops at the first error. Nothing is rolled back, and concurrent readers
//! can observe a half-flushed batch.
//!
//! ## Storage
//!
//! Any [`KvStore`] can be injected. [`MemoryStore`] is the in-process
//! reference implementation.

#![warn(missing_docs)]

mod builder;

pub mod prelude;

pub use builder::AclBuilder;

pub use aclstore_core::{
    AclConfig, Error, KeyList, KvStore, Result, StorageKey, StoreError, StoreResult, ValueCodec,
    ValueSet, DEFAULT_PREFIX,
};
pub use aclstore_engine::{AclBackend, DeferredOp, OperationBatch};
pub use aclstore_storage::{MemoryStore, OpCounts, StoreAdapter};
