//! Backend configuration
//!
//! ```toml
//! prefix = "acl"
//! codec = "length_prefixed"   # or "delimited"
//! ```

use crate::codec::ValueCodec;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Key prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "acl";

/// Configuration of an ACL backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AclConfig {
    /// Leading component of every storage key
    pub prefix: String,
    /// Record layout
    pub codec: ValueCodec,
}

impl Default for AclConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            codec: ValueCodec::default(),
        }
    }
}

impl AclConfig {
    /// Default configuration with the given prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: AclConfig = toml::from_str(s)?;
        Ok(config.normalized())
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Replace an empty prefix with [`DEFAULT_PREFIX`].
    ///
    /// Any other prefix is kept as given. A prefix containing `_` shares its
    /// namespace with shorter prefixes (`my_app` vs. `my` with bucket `app_x`),
    /// so `clean` on either one also sweeps matching records of the other.
    pub fn normalized(mut self) -> Self {
        if self.prefix.is_empty() {
            self.prefix = DEFAULT_PREFIX.to_string();
        }
        self
    }
}
