use crate::core::compose_version::ComposeVersionError;
use crate::manifest::ManifestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeDiffError {
    /// Byte stream could not be opened (network, HTTP status, missing file)
    #[error("Failed to fetch '{location}': {reason}")]
    Fetch { location: String, reason: String },

    #[error("Failed to process manifest '{location}': {source}")]
    Manifest {
        location: String,
        #[source]
        source: ManifestError,
    },

    #[error(transparent)]
    InvalidComposeVersion(#[from] ComposeVersionError),

    #[error("Compose VERSION-FROM '{from}' is newer than VERSION-TO '{to}'")]
    VersionOrder { from: String, to: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),

    #[error("KDL parse error: {0}")]
    Kdl(#[from] kdl::KdlError),

    #[error("{0}")]
    Other(String),
}

impl ComposeDiffError {
    pub fn fetch(location: &str, reason: impl std::fmt::Display) -> Self {
        Self::Fetch {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ComposeDiffError>;
