//! Member sets stored at a [`StorageKey`](crate::StorageKey)
//!
//! A [`ValueSet`] keeps insertion order, drops empty members and keeps only
//! the first occurrence of a repeated member.

use rustc_hash::FxHashSet;

/// Ordered set of member strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet {
    values: Vec<String>,
}

impl ValueSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Build from already-decoded members, dropping empty ones only.
    ///
    /// Used on the read path: duplicates written by another writer are
    /// returned as stored.
    pub fn from_stored(values: Vec<String>) -> Self {
        Self {
            values: values.into_iter().filter(|v| !v.is_empty()).collect(),
        }
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there are no members
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check membership
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Iterate members in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Borrow the members as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    /// Consume into the member vector
    pub fn into_vec(self) -> Vec<String> {
        self.values
    }

    /// Append `other`'s members, then compact and de-duplicate the whole set
    pub fn extend_unique(&mut self, other: impl IntoIterator<Item = String>) {
        self.values.extend(other);
        self.dedup();
    }

    /// Remove every member that appears in `other`.
    ///
    /// Members of `other` that are not present are ignored.
    pub fn difference(&self, other: &ValueSet) -> ValueSet {
        let drop: FxHashSet<&str> = other.iter().collect();
        ValueSet {
            values: self
                .values
                .iter()
                .filter(|v| !drop.contains(v.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Drop empty members and every repeat after the first occurrence
    fn dedup(&mut self) {
        let mut seen = FxHashSet::default();
        self.values
            .retain(|v| !v.is_empty() && seen.insert(v.clone()));
    }
}

impl<S: Into<String>> FromIterator<S> for ValueSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ValueSet {
            values: iter.into_iter().map(Into::into).collect(),
        };
        set.dedup();
        set
    }
}

impl IntoIterator for ValueSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl PartialEq<Vec<&str>> for ValueSet {
    fn eq(&self, other: &Vec<&str>) -> bool {
        self.values.len() == other.len() && self.values.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for ValueSet {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.values.len() == N && self.values.iter().zip(other).all(|(a, b)| a == b)
    }
}

crate::impl_from_strings!(ValueSet);
