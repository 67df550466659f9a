//! ACL backend
//!
//! Bucket/key-scoped member sets over a [`StoreAdapter`].
//!
//! ## Key layout
//!
//! `(bucket, key)` is stored at `prefix + "_" + bucket + "@" + key`, one
//! record per key.
//!
//! ## Reads and writes
//!
//! - `get`/`union` hit the store immediately
//! - `add`/`del`/`remove` only queue a [`DeferredOp`] on an
//!   [`OperationBatch`]; `end` runs the queue strictly in order and stops at
//!   the first failure, leaving earlier operations applied

use crate::batch::{DeferredOp, OperationBatch};
use aclstore_core::{AclConfig, KeyList, KvStore, Result, StorageKey, ValueSet};
use aclstore_storage::StoreAdapter;
use std::sync::Arc;
use tracing::{debug, warn};

/// ACL relation store over an injected key-value store
///
/// # Example
///
/// ```ignore
/// let backend = AclBackend::new(Arc::new(MemoryStore::new()), AclConfig::default());
///
/// let mut batch = backend.begin();
/// backend.add(&mut batch, "role", "admin", ["read", "write"]);
/// backend.end(batch).await?;
///
/// assert_eq!(backend.get("role", "admin").await?, ["read", "write"]);
/// ```
pub struct AclBackend<S: ?Sized> {
    adapter: StoreAdapter<S>,
    config: AclConfig,
}

impl<S: KvStore + ?Sized> AclBackend<S> {
    /// Create a backend over `store`; an empty prefix means `acl`
    pub fn new(store: Arc<S>, config: AclConfig) -> Self {
        let config = config.normalized();
        Self {
            adapter: StoreAdapter::new(store, config.codec),
            config,
        }
    }

    /// Key prefix in use
    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }

    /// Active configuration
    pub fn config(&self) -> &AclConfig {
        &self.config
    }

    /// The underlying store adapter
    pub fn adapter(&self) -> &StoreAdapter<S> {
        &self.adapter
    }

    /// The underlying store handle
    pub fn store(&self) -> &Arc<S> {
        self.adapter.store()
    }

    // =========================================================================
    // Key composition
    // =========================================================================

    /// Storage key of `(bucket, key)`
    pub fn bucket_key(&self, bucket: &str, key: &str) -> StorageKey {
        StorageKey::compose(&self.config.prefix, bucket, key)
    }

    /// Storage keys of every key in `keys`, same order
    pub fn bucket_keys(&self, bucket: &str, keys: impl Into<KeyList>) -> Vec<StorageKey> {
        let keys: KeyList = keys.into();
        keys.iter()
            .map(|key| self.bucket_key(bucket, key))
            .collect()
    }

    // =========================================================================
    // Batches
    // =========================================================================

    /// Start a new, empty operation batch
    pub fn begin(&self) -> OperationBatch {
        OperationBatch::new()
    }

    /// Flush `batch`.
    ///
    /// Operations run one after another in the order they were queued; the
    /// next one is not started before the previous one finished. The first
    /// error stops the flush and is returned unchanged. Operations that
    /// already ran are **not** undone.
    ///
    /// An empty batch returns `Ok(())` without touching the store.
    pub async fn end(&self, batch: OperationBatch) -> Result<()> {
        let total = batch.len();
        if total == 0 {
            return Ok(());
        }

        for (index, op) in batch.into_iter().enumerate() {
            let kind = op.kind();
            if let Err(e) = self.execute(op).await {
                warn!(
                    index,
                    kind,
                    total,
                    error = %e,
                    "batch aborted, operations before index remain applied"
                );
                return Err(e);
            }
        }

        debug!(total, "batch flushed");
        Ok(())
    }

    /// Queue: append `values` to the set at `(bucket, key)`
    pub fn add(
        &self,
        batch: &mut OperationBatch,
        bucket: &str,
        key: &str,
        values: impl Into<ValueSet>,
    ) {
        batch.push(DeferredOp::Add {
            key: self.bucket_key(bucket, key),
            values: values.into(),
        });
    }

    /// Queue: delete every key in `keys`, in order
    pub fn del(&self, batch: &mut OperationBatch, bucket: &str, keys: impl Into<KeyList>) {
        batch.push(DeferredOp::Delete {
            keys: self.bucket_keys(bucket, keys),
        });
    }

    /// Queue: drop `values` from the set at `(bucket, key)`
    pub fn remove(
        &self,
        batch: &mut OperationBatch,
        bucket: &str,
        key: &str,
        values: impl Into<ValueSet>,
    ) {
        batch.push(DeferredOp::Remove {
            key: self.bucket_key(bucket, key),
            values: values.into(),
        });
    }

    async fn execute(&self, op: DeferredOp) -> Result<()> {
        match op {
            DeferredOp::Add { key, values } => {
                let mut current = self.adapter.get(&key).await?;
                current.extend_unique(values);
                self.adapter.put(&key, &current).await
            }
            DeferredOp::Remove { key, values } => {
                let current = self.adapter.get(&key).await?;
                self.adapter.put(&key, &current.difference(&values)).await
            }
            DeferredOp::Delete { keys } => {
                for key in &keys {
                    self.adapter.delete(key).await?;
                }
                Ok(())
            }
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Members stored at `(bucket, key)`; empty if never written
    pub async fn get(&self, bucket: &str, key: &str) -> Result<ValueSet> {
        self.adapter.get(&self.bucket_key(bucket, key)).await
    }

    /// Union of the sets at every key in `keys`.
    ///
    /// Keys are fetched one at a time in the given order. The result keeps
    /// the first occurrence of each member. The first fetch error is
    /// returned.
    pub async fn union(&self, bucket: &str, keys: impl Into<KeyList>) -> Result<ValueSet> {
        let mut merged = Vec::new();
        for key in self.bucket_keys(bucket, keys) {
            merged.extend(self.adapter.get(&key).await?);
        }
        Ok(merged.into_iter().collect())
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Delete every record under this backend's prefix.
    ///
    /// Records are deleted one at a time; the first error stops the sweep.
    /// Records written concurrently may survive. Returns the number of
    /// records deleted.
    ///
    /// The sweep matches on `prefix_`, so with a prefix `my` it also removes
    /// records of a backend using `my_app` on the same store.
    pub async fn clean(&self) -> Result<usize> {
        let namespace = StorageKey::namespace(&self.config.prefix);
        let keys = self.adapter.keys_with_prefix(&namespace).await?;
        for key in &keys {
            self.adapter.delete(key).await?;
        }
        debug!(prefix = %self.config.prefix, removed = keys.len(), "clean");
        Ok(keys.len())
    }
}

impl<S: ?Sized> std::fmt::Debug for AclBackend<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AclBackend")
            .field("prefix", &self.config.prefix)
            .field("codec", &self.config.codec)
            .finish()
    }
}
