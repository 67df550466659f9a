//! Addressing types
//!
//! - [`StorageKey`]: `prefix + "_" + bucket + "@" + key`, the only unit the
//!   underlying store is addressed by
//! - [`KeyList`]: one-or-many key argument

use serde::{Deserialize, Serialize};

/// Implements one-or-many `From` conversions for a type that is
/// `FromIterator<String>`.
#[macro_export]
#[doc(hidden)]
macro_rules! impl_from_strings {
    ($ty:ty) => {
        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                std::iter::once(s).collect()
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                std::iter::once(s).collect()
            }
        }

        impl From<&String> for $ty {
            fn from(s: &String) -> Self {
                std::iter::once(s.as_str()).collect()
            }
        }

        impl From<Vec<String>> for $ty {
            fn from(v: Vec<String>) -> Self {
                v.into_iter().collect()
            }
        }

        impl From<Vec<&str>> for $ty {
            fn from(v: Vec<&str>) -> Self {
                v.into_iter().collect()
            }
        }

        impl From<&[&str]> for $ty {
            fn from(v: &[&str]) -> Self {
                v.iter().copied().collect()
            }
        }

        impl From<&[String]> for $ty {
            fn from(v: &[String]) -> Self {
                v.iter().map(String::as_str).collect()
            }
        }

        impl<const N: usize> From<[&str; N]> for $ty {
            fn from(v: [&str; N]) -> Self {
                v.into_iter().collect()
            }
        }
    };
}

/// Separator between prefix and bucket
pub const PREFIX_SEPARATOR: char = '_';

/// Separator between bucket and key
pub const BUCKET_SEPARATOR: char = '@';

/// Composed address of one ACL record in the underlying store
///
/// # Examples
///
/// ```
/// use aclstore_core::StorageKey;
///
/// let key = StorageKey::compose("acl", "role", "admin");
/// assert_eq!(key.as_str(), "acl_role@admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StorageKey(String);

impl StorageKey {
    /// Compose the storage key for `(bucket, key)` under `prefix`
    pub fn compose(prefix: &str, bucket: &str, key: &str) -> Self {
        let mut s = String::with_capacity(prefix.len() + bucket.len() + key.len() + 2);
        s.push_str(prefix);
        s.push(PREFIX_SEPARATOR);
        s.push_str(bucket);
        s.push(BUCKET_SEPARATOR);
        s.push_str(key);
        StorageKey(s)
    }

    /// The scan prefix covering every record under `prefix`
    pub fn namespace(prefix: &str) -> String {
        format!("{}{}", prefix, PREFIX_SEPARATOR)
    }

    /// Wrap a raw key read back from the store
    pub fn from_raw(raw: impl Into<String>) -> Self {
        StorageKey(raw.into())
    }

    /// Borrow as `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One or more keys within a bucket
///
/// Order and duplicates are preserved exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyList(Vec<String>);

impl KeyList {
    /// Number of keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no key was given
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in the given order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl IntoIterator for KeyList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<S: Into<String>> FromIterator<S> for KeyList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeyList(iter.into_iter().map(Into::into).collect())
    }
}

crate::impl_from_strings!(KeyList);
