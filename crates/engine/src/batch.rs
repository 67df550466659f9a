//! Deferred operation batches
//!
//! An [`OperationBatch`] is an ordered list of mutations recorded by
//! [`AclBackend::add`](crate::AclBackend::add),
//! [`AclBackend::del`](crate::AclBackend::del) and
//! [`AclBackend::remove`](crate::AclBackend::remove). Nothing touches the
//! store until the batch is handed to
//! [`AclBackend::end`](crate::AclBackend::end).
//!
//! ## Not a transaction
//!
//! A batch is flushed one operation at a time, in insertion order, and stops
//! at the first failure. Operations applied before the failure stay applied:
//! there is no rollback, no isolation from concurrent readers or writers,
//! and the read-modify-write operations are last-write-wins.
//!
//! ```text
//! begin() -> [Add, Delete, Remove] -> end()
//!                                      |
//!                 Add ok -> Delete ok -> Remove fails -> Err (Add, Delete kept)
//! ```

use aclstore_core::{StorageKey, ValueSet};

/// One deferred mutation, bound to its storage key(s) and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredOp {
    /// Read the set, append `values`, de-duplicate, write back
    Add {
        /// Target record
        key: StorageKey,
        /// Members to add
        values: ValueSet,
    },
    /// Read the set, drop `values`, write back
    Remove {
        /// Target record
        key: StorageKey,
        /// Members to remove
        values: ValueSet,
    },
    /// Delete each record in order
    Delete {
        /// Target records
        keys: Vec<StorageKey>,
    },
}

impl DeferredOp {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            DeferredOp::Add { .. } => "add",
            DeferredOp::Remove { .. } => "remove",
            DeferredOp::Delete { .. } => "delete",
        }
    }
}

/// Ordered list of deferred mutations
///
/// Created by [`AclBackend::begin`](crate::AclBackend::begin) and consumed by
/// [`AclBackend::end`](crate::AclBackend::end). Since `end` takes the batch by
/// value, nothing can be queued on a batch once its flush has started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationBatch {
    ops: Vec<DeferredOp>,
}

impl OperationBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Number of queued operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Queued operations in flush order
    pub fn iter(&self) -> impl Iterator<Item = &DeferredOp> {
        self.ops.iter()
    }

    pub(crate) fn push(&mut self, op: DeferredOp) {
        self.ops.push(op);
    }
}

impl IntoIterator for OperationBatch {
    type Item = DeferredOp;
    type IntoIter = std::vec::IntoIter<DeferredOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}
