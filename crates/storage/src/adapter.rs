//! Set-level view of a [`KvStore`]
//!
//! [`StoreAdapter`] turns the raw byte primitives into [`ValueSet`]
//! operations:
//! - `get` of an absent key yields an empty set, never an error
//! - records are encoded/decoded with the configured [`ValueCodec`]
//! - any other store failure surfaces as [`Error::Store`]

use aclstore_core::{Error, KvStore, Result, StorageKey, ValueCodec, ValueSet};
use std::sync::Arc;
use tracing::debug;

/// Codec-aware wrapper around a shared store handle
pub struct StoreAdapter<S: ?Sized> {
    store: Arc<S>,
    codec: ValueCodec,
}

impl<S: KvStore + ?Sized> StoreAdapter<S> {
    /// Wrap a store handle
    pub fn new(store: Arc<S>, codec: ValueCodec) -> Self {
        Self { store, codec }
    }

    /// The wrapped store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Record layout in use
    pub fn codec(&self) -> ValueCodec {
        self.codec
    }

    /// Read the set at `key`; absent keys read as empty
    pub async fn get(&self, key: &StorageKey) -> Result<ValueSet> {
        match self.store.get(key.as_str()).await {
            Ok(bytes) => {
                let values = self.codec.decode(key.as_str(), &bytes)?;
                debug!(key = %key, members = values.len(), "get");
                Ok(values)
            }
            Err(e) if e.is_not_found() => {
                debug!(key = %key, "get: not found, empty set");
                Ok(ValueSet::new())
            }
            Err(e) => Err(Error::Store(e)),
        }
    }

    /// Encode and write `values` at `key`
    pub async fn put(&self, key: &StorageKey, values: &ValueSet) -> Result<()> {
        let bytes = self.codec.encode(values)?;
        debug!(key = %key, members = values.len(), bytes = bytes.len(), "put");
        self.store.put(key.as_str(), bytes).await?;
        Ok(())
    }

    /// Remove the record at `key`
    pub async fn delete(&self, key: &StorageKey) -> Result<()> {
        debug!(key = %key, "delete");
        self.store.delete(key.as_str()).await?;
        Ok(())
    }

    /// Every storage key beginning with `prefix`, ascending
    pub async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<StorageKey>> {
        let keys = self.store.scan_prefix(prefix).await?;
        Ok(keys.into_iter().map(StorageKey::from_raw).collect())
    }
}

impl<S: ?Sized> Clone for StoreAdapter<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            codec: self.codec,
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for StoreAdapter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreAdapter")
            .field("codec", &self.codec)
            .finish()
    }
}
