//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values
//! and the upstream compose layout.

pub const BINARY_NAME: &str = "compose-diff";
pub const CONFIG_DIR_NAME: &str = "compose-diff";
pub const ENV_PREFIX: &str = "COMPOSE_DIFF";
pub const SETTINGS_FILE_BASENAME: &str = "settings.kdl";

/// Rawhide compose index served by Koji.
pub const DEFAULT_COMPOSE_ROOT: &str = "https://kojipkgs.fedoraproject.org/compose/rawhide/";

/// Directory prefix of dated Rawhide composes (`Fedora-Rawhide-20250626.n.0`).
pub const COMPOSE_DIR_PREFIX: &str = "Fedora-Rawhide-";

/// Symlinked directory pointing at the newest compose.
pub const LATEST_COMPOSE_DIR: &str = "latest-Fedora-Rawhide";

/// Manifest location relative to a compose directory.
pub const RPMS_MANIFEST_PATH: &str = "compose/metadata/rpms.json";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

pub fn env_get(suffix: &str) -> Option<String> {
    std::env::var(env_key(suffix)).ok()
}

pub fn user_agent() -> String {
    format!("{}/{}", BINARY_NAME, env!("CARGO_PKG_VERSION"))
}
