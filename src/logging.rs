//! Diagnostic logging
//!
//! `tracing` events go to stderr. `RUST_LOG` wins when set; otherwise
//! `-v` selects `debug` and the default is `warn`.

use crate::core::diff::{Package, PackageDiff};
use crate::traits::ManifestObserver;
use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_level = if verbose { "compose_diff=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Forwards parser and diff events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ManifestObserver for TracingObserver {
    fn stream_opened(&self, location: &str) {
        tracing::debug!(location, "streaming manifest");
    }

    fn package_parsed(&self, nevra: &str, package: &Package) {
        tracing::trace!(nevra, name = %package.name, version = %package.version, "package");
    }

    fn manifest_parsed(&self, arch: &str, packages: usize) {
        tracing::debug!(arch, packages, "manifest parsed");
    }

    fn diff_computed(&self, diff: &PackageDiff) {
        tracing::debug!(
            removed = diff.removed.len(),
            added = diff.added.len(),
            changed = diff.changed.len(),
            "computed package diff"
        );
    }
}
