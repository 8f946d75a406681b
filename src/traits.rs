//! Core traits for dependency injection and testability
//!
//! The manifest parser and the diff engine never reach for global state:
//! byte streams come from a [`ByteSource`] and progress is reported to a
//! [`ManifestObserver`] handed in by the caller. This allows us to:
//! - Read manifests from Koji, a local mirror or an in-memory fixture
//! - Record parser events in tests
//! - Run both manifest jobs in parallel without shared mutable state

use crate::core::diff::{Package, PackageDiff};
use crate::error::Result;
use std::io::Read;

/// Opens a sequential byte stream for a manifest or index location.
///
/// Failures to open (network errors, non-success HTTP status, missing
/// files) are reported as [`crate::error::ComposeDiffError::Fetch`]; the
/// caller does not interpret them further.
pub trait ByteSource: Send + Sync {
    fn open(&self, location: &str) -> Result<Box<dyn Read + Send>>;
}

/// Receives progress events from the manifest parser and the diff engine.
///
/// Every hook has an empty default so implementors pick what they need.
pub trait ManifestObserver: Send + Sync {
    /// A byte stream for `location` is about to be parsed
    fn stream_opened(&self, _location: &str) {}

    /// One NEVRA key under the architecture object was decoded
    fn package_parsed(&self, _nevra: &str, _package: &Package) {}

    /// The architecture object was fully read
    fn manifest_parsed(&self, _arch: &str, _packages: usize) {}

    /// A diff between two snapshots was computed
    fn diff_computed(&self, _diff: &PackageDiff) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl ManifestObserver for SilentObserver {}
