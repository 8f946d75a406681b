//! Available compose listing
//!
//! Koji serves the compose root as an HTML directory index. Dated composes
//! appear as `Fedora-Rawhide-<id>/` links and the newest one is also linked
//! as `latest-Fedora-Rawhide/`.

use crate::compose::ComposeRoot;
use crate::core::compose_version::ComposeVersion;
use crate::error::{ComposeDiffError, Result};
use crate::project_identity::{COMPOSE_DIR_PREFIX, LATEST_COMPOSE_DIR};
use crate::traits::ByteSource;
use regex::Regex;
use std::fs;
use std::io::Read;
use std::sync::LazyLock;

pub(super) static COMPOSE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a href="Fedora-Rawhide-([0-9]{8}\.[[:alnum:]]\.[0-9]+)/">"#)
        .expect("valid compose link regex")
});

static LATEST_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a href="latest-Fedora-Rawhide/">"#).expect("valid latest link regex")
});

/// Extract compose versions from an index page, in page order, with
/// `latest` appended when the page links it
pub fn parse_compose_index(html: &str) -> Vec<ComposeVersion> {
    let mut versions: Vec<ComposeVersion> = COMPOSE_LINK
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .filter_map(|id| parse_listed(id.as_str()))
        .collect();

    if LATEST_LINK.is_match(html) {
        versions.push(ComposeVersion::Latest);
    }

    versions
}

/// Extract compose versions from directory entry names, sorted oldest
/// first, with `latest` last when present
pub fn parse_compose_dir_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<ComposeVersion> {
    let mut has_latest = false;
    let mut versions: Vec<ComposeVersion> = names
        .into_iter()
        .filter_map(|name| {
            if name == LATEST_COMPOSE_DIR {
                has_latest = true;
                return None;
            }
            parse_listed(name.strip_prefix(COMPOSE_DIR_PREFIX)?)
        })
        .collect();

    versions.sort();
    versions.dedup();
    if has_latest {
        versions.push(ComposeVersion::Latest);
    }

    versions
}

/// Listed ids that are not valid compose versions are skipped with a warning
fn parse_listed(id: &str) -> Option<ComposeVersion> {
    match id.parse() {
        Ok(version) => Some(version),
        Err(e) => {
            tracing::warn!(id, error = %e, "skipping listed compose");
            None
        }
    }
}

/// List the composes available under `root`
pub fn list_versions(root: &ComposeRoot, source: &dyn ByteSource) -> Result<Vec<ComposeVersion>> {
    match root {
        ComposeRoot::Remote { base_url } => {
            let mut html = String::new();
            source
                .open(base_url)?
                .read_to_string(&mut html)
                .map_err(|e| ComposeDiffError::fetch(base_url, e))?;
            Ok(parse_compose_index(&html))
        }
        ComposeRoot::Local { dir } => {
            let entries = fs::read_dir(dir)
                .map_err(|e| ComposeDiffError::fetch(&dir.to_string_lossy(), e))?;

            let mut names = Vec::new();
            for entry in entries {
                let entry = entry?;
                if entry.path().is_dir() {
                    names.push(entry.file_name().to_string_lossy().into_owned());
                }
            }

            Ok(parse_compose_dir_names(names.iter().map(String::as_str)))
        }
    }
}
