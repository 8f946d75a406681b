//! Three-way package diff between two snapshots

use crate::core::snapshot::Snapshot;
use crate::traits::{ManifestObserver, SilentObserver};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A package present on both sides with a different version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedPackage {
    pub name: String,
    pub version_from: String,
    pub version_to: String,
}

/// Result of comparing a "from" snapshot with a "to" snapshot.
///
/// Serializes to `{"removed": [...], "added": [...], "changed": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDiff {
    pub removed: Vec<Package>,
    pub added: Vec<Package>,
    pub changed: Vec<ChangedPackage>,
}

impl PackageDiff {
    /// True when both snapshots carried the same packages at the same versions
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }

    /// Number of entries across all three categories
    pub fn total(&self) -> usize {
        self.removed.len() + self.added.len() + self.changed.len()
    }
}

/// Compute the package diff from `from` to `to`
pub fn diff(from: &Snapshot, to: &Snapshot) -> PackageDiff {
    diff_with_observer(from, to, &SilentObserver)
}

/// Compute the package diff, reporting the result to `observer`.
///
/// - `removed` follows `from` order
/// - `added` and `changed` follow `to` order
///
/// Names with identical versions on both sides appear nowhere.
pub fn diff_with_observer(
    from: &Snapshot,
    to: &Snapshot,
    observer: &dyn ManifestObserver,
) -> PackageDiff {
    let removed = from
        .iter()
        .filter(|(name, _)| !to.contains(name))
        .map(|(name, version)| Package::new(name, version))
        .collect();

    let added = to
        .iter()
        .filter(|(name, _)| !from.contains(name))
        .map(|(name, version)| Package::new(name, version))
        .collect();

    let changed = to
        .iter()
        .filter_map(|(name, version_to)| {
            let version_from = from.get(name)?;
            (version_from != version_to).then(|| ChangedPackage {
                name: name.to_string(),
                version_from: version_from.to_string(),
                version_to: version_to.to_string(),
            })
        })
        .collect();

    let result = PackageDiff {
        removed,
        added,
        changed,
    };

    observer.diff_computed(&result);
    result
}
