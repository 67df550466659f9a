//! In-memory ordered store
//!
//! BTreeMap behind a `parking_lot::RwLock`:
//! - get(): shared read lock, O(log n)
//! - put()/delete(): exclusive write lock
//! - scan_prefix(): ordered range scan starting at the prefix
//!
//! Every primitive call bumps an atomic counter so callers can check whether
//! an operation touched the store at all.

use aclstore_core::{KvStore, StoreError, StoreResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of primitive call counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// `get` calls, including misses
    pub gets: u64,
    /// `put` calls
    pub puts: u64,
    /// `delete` calls, including deletes of absent keys
    pub deletes: u64,
    /// `scan_prefix` calls
    pub scans: u64,
}

impl OpCounts {
    /// Sum of all calls
    pub fn total(&self) -> u64 {
        self.gets + self.puts + self.deletes + self.scans
    }
}

/// Ordered in-memory key-value store
///
/// # Thread Safety
///
/// All operations are thread-safe. Readers share the lock; a writer holds it
/// only for the single insert or remove. No lock is held across an `.await`.
///
/// # Example
///
/// ```ignore
/// use aclstore_storage::MemoryStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// ```
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
    gets: AtomicU64,
    puts: AtomicU64,
    deletes: AtomicU64,
    scans: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            gets: AtomicU64::new(0),
            puts: AtomicU64::new(0),
            deletes: AtomicU64::new(0),
            scans: AtomicU64::new(0),
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// True when no record is stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Check if a record exists, without counting as a `get`
    pub fn contains(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    /// Raw record bytes, without counting as a `get`
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.data.read().get(key).cloned()
    }

    /// All keys in ascending order
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }

    /// Primitive calls served so far
    pub fn op_counts(&self) -> OpCounts {
        OpCounts {
            gets: self.gets.load(Ordering::Acquire),
            puts: self.puts.load(Ordering::Acquire),
            deletes: self.deletes.load(Ordering::Acquire),
            scans: self.scans.load(Ordering::Acquire),
        }
    }

    fn get_sync(&self, key: &str) -> StoreResult<Vec<u8>> {
        self.gets.fetch_add(1, Ordering::AcqRel);
        self.data
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::not_found(key))
    }

    fn put_sync(&self, key: &str, value: Vec<u8>) {
        self.puts.fetch_add(1, Ordering::AcqRel);
        self.data.write().insert(key.to_string(), value);
    }

    fn delete_sync(&self, key: &str) {
        self.deletes.fetch_add(1, Ordering::AcqRel);
        self.data.write().remove(key);
    }

    fn scan_prefix_sync(&self, prefix: &str) -> Vec<String> {
        self.scans.fetch_add(1, Ordering::AcqRel);
        self.data
            .read()
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.len())
            .field("op_counts", &self.op_counts())
            .finish()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        self.get_sync(key)
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        self.put_sync(key, value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.delete_sync(key);
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        Ok(self.scan_prefix_sync(prefix))
    }
}
