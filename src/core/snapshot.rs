//! Insertion-ordered name -> version mapping for one compose and architecture

use std::collections::HashMap;

/// Package versions extracted from one manifest.
///
/// Iteration follows first-insertion order. Re-inserting a name replaces
/// its version in place, so the entry keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a package version, returning the previous one
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) -> Option<String> {
        let name = name.into();
        let version = version.into();

        if let Some(&slot) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[slot].1, version));
        }

        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, version));
        None
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, version)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Snapshot {}

impl<N, V> FromIterator<(N, V)> for Snapshot
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for (name, version) in iter {
            snapshot.insert(name, version);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests;
