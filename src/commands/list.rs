//! `list` command: show the composes available under the compose root

use crate::compose::ComposeRoot;
use crate::compose::index::list_versions;
use crate::config::Settings;
use crate::core::compose_version::ComposeVersion;
use crate::error::Result;
use crate::utils::machine_output;

pub fn run(settings: &Settings) -> Result<()> {
    let root = ComposeRoot::parse(&settings.compose_root)?;
    let source = root.byte_source(settings)?;

    tracing::debug!(%root, "listing composes");
    let versions = list_versions(&root, source.as_ref())?;

    if machine_output::emit(&versions, settings.format)? {
        return Ok(());
    }

    print!("{}", render_text(&versions, &root));
    Ok(())
}

fn render_text(versions: &[ComposeVersion], root: &ComposeRoot) -> String {
    if versions.is_empty() {
        return format!("No Rawhide composes found at {}\n", root);
    }

    let mut out = String::from("Available Rawhide composes:\n");
    for version in versions {
        out.push_str(&format!("    {}\n", version));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn lists_each_version_indented() {
        let root = ComposeRoot::Local {
            dir: PathBuf::from("/srv/rawhide"),
        };
        let versions: Vec<ComposeVersion> = ["20250709.n.0", "latest"]
            .iter()
            .map(|v| v.parse().unwrap())
            .collect();

        assert_eq!(
            render_text(&versions, &root),
            "Available Rawhide composes:\n    20250709.n.0\n    latest\n"
        );
    }

    #[test]
    fn empty_listing_names_the_root() {
        let root = ComposeRoot::parse("https://koji.example.org/compose/rawhide").unwrap();

        assert_eq!(
            render_text(&[], &root),
            "No Rawhide composes found at https://koji.example.org/compose/rawhide/\n"
        );
    }
}
