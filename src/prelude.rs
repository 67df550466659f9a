//! Convenient imports for aclstore.
//!
//! ```ignore
//! use aclstore::prelude::*;
//!
//! let acl = AclBuilder::new().open_memory();
//! ```

// Entry points
pub use crate::{AclBackend, AclBuilder};

// Error handling
pub use crate::{Error, Result};

// Batches
pub use crate::{DeferredOp, OperationBatch};

// Storage
pub use crate::{KvStore, MemoryStore};

// Core types
pub use crate::{AclConfig, StorageKey, ValueCodec, ValueSet};
