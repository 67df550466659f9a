//! Storage layer for aclstore
//!
//! This crate provides:
//! - MemoryStore: ordered in-memory [`KvStore`](aclstore_core::KvStore)
//! - StoreAdapter: [`ValueSet`](aclstore_core::ValueSet) get/put/delete over
//!   any store, with not-found normalized to an empty set

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod memory;

pub use adapter::StoreAdapter;
pub use memory::{MemoryStore, OpCounts};
