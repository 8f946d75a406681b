//! Compose roots: where composes and their manifests live
//!
//! A root is either the Koji HTTP index (or any mirror of it) or a local
//! directory laid out the same way.

pub mod index;

use crate::config::settings::Settings;
use crate::core::compose_version::ComposeVersion;
use crate::error::{ComposeDiffError, Result};
use crate::project_identity::RPMS_MANIFEST_PATH;
use crate::traits::ByteSource;
use crate::utils::local::FileSource;
use crate::utils::remote::HttpSource;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeRoot {
    Remote { base_url: String },
    Local { dir: PathBuf },
}

impl ComposeRoot {
    /// Interpret a configured root: `http(s)://` is remote, `file://` and
    /// anything else is a local directory
    pub fn parse(root: &str) -> Result<Self> {
        let root = root.trim();
        if root.is_empty() {
            return Err(ComposeDiffError::Config(
                "compose root must not be empty".to_string(),
            ));
        }

        if root.starts_with("https://") || root.starts_with("http://") {
            let base_url = if root.ends_with('/') {
                root.to_string()
            } else {
                format!("{}/", root)
            };
            return Ok(Self::Remote { base_url });
        }

        let dir = root.strip_prefix("file://").unwrap_or(root);
        Ok(Self::Local {
            dir: PathBuf::from(dir),
        })
    }

    /// Location of `rpms.json` for `version`, in the form the root's
    /// byte source expects
    pub fn manifest_location(&self, version: &ComposeVersion) -> String {
        match self {
            Self::Remote { base_url } => format!(
                "{}{}/{}",
                base_url,
                version.directory_name(),
                RPMS_MANIFEST_PATH
            ),
            Self::Local { dir } => dir
                .join(version.directory_name())
                .join(RPMS_MANIFEST_PATH)
                .to_string_lossy()
                .into_owned(),
        }
    }

    /// Byte source able to open this root's locations
    pub fn byte_source(&self, settings: &Settings) -> Result<Box<dyn ByteSource>> {
        match self {
            Self::Remote { .. } => Ok(Box::new(HttpSource::new(
                Duration::from_secs(settings.timeout_secs),
                settings.allow_insecure_http,
            )?)),
            Self::Local { .. } => Ok(Box::new(FileSource)),
        }
    }
}

impl fmt::Display for ComposeRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote { base_url } => f.write_str(base_url),
            Self::Local { dir } => write!(f, "{}", dir.display()),
        }
    }
}
