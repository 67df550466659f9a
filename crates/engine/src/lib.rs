//! ACL engine
//!
//! This crate implements the public set operations:
//! - AclBackend: get, union, add, del, remove, clean over any
//!   [`KvStore`](aclstore_core::KvStore)
//! - OperationBatch: deferred mutations flushed in order by
//!   [`AclBackend::end`], halting on the first error without rollback

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod batch;

pub use backend::AclBackend;
pub use batch::{DeferredOp, OperationBatch};
