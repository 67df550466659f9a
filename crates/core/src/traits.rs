//! Contract of the underlying ordered key-value store
//!
//! Implementations only need exact-match get/put/delete plus an ordered
//! prefix scan. Thread-safety is part of the contract: a store handle is
//! shared behind an `Arc` by every backend built on it.

use crate::error::StoreResult;
use async_trait::async_trait;

/// Async primitives of an ordered key-value store
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the record at `key`.
    ///
    /// Must return [`StoreError::NotFound`](crate::StoreError::NotFound) when
    /// the key is absent, so callers can tell it apart from real failures.
    async fn get(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// Write `value` at `key`, replacing any previous record
    async fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()>;

    /// Remove `key`. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// All keys starting with `prefix`, in ascending order
    async fn scan_prefix(&self, prefix: &str) -> StoreResult<Vec<String>>;
}

#[async_trait]
impl<S: KvStore + ?Sized> KvStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        (**self).put(key, value).await
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key).await
    }

    async fn scan_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        (**self).scan_prefix(prefix).await
    }
}
