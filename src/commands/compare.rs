//! `compare` command: diff the package manifests of two composes

mod presentation;

use crate::compose::ComposeRoot;
use crate::config::{OutputFormat, Settings};
use crate::core::compose_version::ComposeVersion;
use crate::core::diff::{PackageDiff, diff_with_observer};
use crate::core::snapshot::Snapshot;
use crate::error::{ComposeDiffError, Result};
use crate::logging::TracingObserver;
use crate::manifest::parse_manifest;
use crate::traits::{ByteSource, ManifestObserver};
use crate::ui as output;
use crate::utils::machine_output;

#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub from: String,
    pub to: String,
    pub arch: Option<String>,
    pub json_output: bool,
    pub sequential: bool,
}

pub fn run(options: CompareOptions, settings: &Settings) -> Result<()> {
    let from: ComposeVersion = options.from.parse()?;
    let to: ComposeVersion = options.to.parse()?;
    let arch = options.arch.as_deref().unwrap_or(&settings.arch);
    let format = if options.json_output {
        OutputFormat::Json
    } else {
        settings.format
    };

    tracing::debug!(%from, %to, arch, %format, "requested diff");

    if from == to {
        output::warning("Compose versions are identical. Package diff is empty.");
        return Ok(());
    }
    check_order(&from, &to)?;

    let root = ComposeRoot::parse(&settings.compose_root)?;
    let source = root.byte_source(settings)?;
    let observer = TracingObserver;

    let (packages_from, packages_to) = load_pair(
        &root,
        source.as_ref(),
        (&from, &to),
        arch,
        &observer,
        options.sequential,
    )?;

    let diff = diff_with_observer(&packages_from, &packages_to, &observer);
    report(&diff, format, arch, &from, &to)
}

/// Reject comparisons that run backwards in time
pub fn check_order(from: &ComposeVersion, to: &ComposeVersion) -> Result<()> {
    if from > to {
        return Err(ComposeDiffError::VersionOrder {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(())
}

/// Stream and parse the manifest of one compose
pub fn load_snapshot(
    root: &ComposeRoot,
    source: &dyn ByteSource,
    version: &ComposeVersion,
    arch: &str,
    observer: &dyn ManifestObserver,
) -> Result<Snapshot> {
    let location = root.manifest_location(version);
    output::info(&format!(
        "Please wait, downloading '{}' version rpms.json",
        version
    ));

    let stream = source.open(&location)?;
    observer.stream_opened(&location);

    parse_manifest(stream, arch, observer)
        .map_err(|source| ComposeDiffError::Manifest { location, source })
}

/// Load both snapshots, side by side unless `sequential`.
///
/// Either failure aborts the comparison; the "from" side is reported
/// first when both fail.
pub fn load_pair(
    root: &ComposeRoot,
    source: &dyn ByteSource,
    (from, to): (&ComposeVersion, &ComposeVersion),
    arch: &str,
    observer: &dyn ManifestObserver,
    sequential: bool,
) -> Result<(Snapshot, Snapshot)> {
    let load = |version: &ComposeVersion| load_snapshot(root, source, version, arch, observer);

    if sequential {
        let packages_from = load(from)?;
        let packages_to = load(to)?;
        return Ok((packages_from, packages_to));
    }

    let (packages_from, packages_to) = rayon::join(|| load(from), || load(to));
    Ok((packages_from?, packages_to?))
}

fn report(
    diff: &PackageDiff,
    format: OutputFormat,
    arch: &str,
    from: &ComposeVersion,
    to: &ComposeVersion,
) -> Result<()> {
    if machine_output::emit(diff, format)? {
        return Ok(());
    }

    print!("{}", presentation::render_text(diff, arch, from, to));
    Ok(())
}
