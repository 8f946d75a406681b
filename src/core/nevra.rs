//! NEVRA key decoding
//!
//! Manifest entries are keyed by strings like `0ad-0:0.0.26-30.fc43.src`.
//! Only the package name and its `epoch:version-release` are kept; the
//! dist tag and the trailing architecture/extension segment are dropped.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed NEVRA key '{key}': expected <name>-<version>-<release>")]
pub struct NevraError {
    pub key: String,
}

/// Name and version decoded from a NEVRA key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nevra<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

impl<'a> Nevra<'a> {
    /// Split a NEVRA key into name and version.
    ///
    /// The key is split on `-` from the right into `[name, version, release]`.
    /// `version-release` is then split on `.` from the right into at most
    /// three parts and only the leftmost part is kept, so
    /// `0ad-0:0.0.26-30.fc43.x86_64` yields `("0ad", "0:0.0.26-30")`.
    ///
    /// This is intentionally lossy: a version containing dots but no dist
    /// tag loses its tail the same way.
    pub fn parse(key: &'a str) -> Result<Self, NevraError> {
        let malformed = || NevraError {
            key: key.to_string(),
        };

        let mut hyphen_parts = key.rsplitn(3, '-');
        let release = hyphen_parts.next().ok_or_else(malformed)?;
        let _version = hyphen_parts.next().ok_or_else(malformed)?;
        let name = hyphen_parts.next().ok_or_else(malformed)?;
        if name.is_empty() {
            return Err(malformed());
        }

        // version-release is a contiguous slice of the key: everything after `name-`
        let raw_version = &key[name.len() + 1..];
        debug_assert!(raw_version.ends_with(release));

        let version = raw_version.rsplitn(3, '.').last().unwrap_or(raw_version);

        Ok(Self { name, version })
    }
}
