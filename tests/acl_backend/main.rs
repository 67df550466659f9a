//! ACL Backend Integration Tests
//!
//! End-to-end behaviour of AclBackend over MemoryStore and a fault-injecting
//! store: reads, deferred mutations, batch flush ordering and abort, union,
//! clean, codecs.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test acl_backend
//!
//! # Batch tests only
//! cargo test --test acl_backend batch_ops::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod clean_ops;
mod properties;
mod union_ops;
