//! Backend construction.
//!
//! This module provides [`AclBuilder`], the entry point for opening an
//! [`AclBackend`] over an injected store or a fresh in-memory one.

use crate::{AclBackend, AclConfig, KvStore, MemoryStore, Result, ValueCodec};
use std::path::Path;
use std::sync::Arc;

/// Builder for backend configuration.
///
/// # Example
///
/// ```ignore
/// // Production: shared store handle, custom prefix
/// let backend = AclBuilder::new()
///     .prefix("perm")
///     .open(Arc::clone(&store));
///
/// // Reading records written with the comma-joined layout
/// let legacy = AclBuilder::new().delimited().open(store);
///
/// // Tests: private in-memory store
/// let backend = AclBuilder::new().open_memory();
/// ```
#[derive(Debug, Clone, Default)]
pub struct AclBuilder {
    config: AclConfig,
}

impl AclBuilder {
    /// Create a builder with default settings (`acl` prefix, length-prefixed
    /// records).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: AclConfig) -> Self {
        Self { config }
    }

    /// Start from a TOML configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_config(AclConfig::from_file(path)?))
    }

    /// Set the storage key prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the record layout.
    pub fn codec(mut self, codec: ValueCodec) -> Self {
        self.config.codec = codec;
        self
    }

    /// Use the comma-joined record layout.
    ///
    /// Members containing `,` are refused when a batch is flushed.
    pub fn delimited(self) -> Self {
        self.codec(ValueCodec::Delimited)
    }

    /// The configuration built so far.
    pub fn config(&self) -> &AclConfig {
        &self.config
    }

    /// Open a backend over `store`.
    pub fn open<S: KvStore + ?Sized>(self, store: Arc<S>) -> AclBackend<S> {
        AclBackend::new(store, self.config)
    }

    /// Open a backend over a new, private [`MemoryStore`].
    pub fn open_memory(self) -> AclBackend<MemoryStore> {
        self.open(Arc::new(MemoryStore::new()))
    }
}
