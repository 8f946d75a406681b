//! Settings Module
//!
//! Resolves compose-diff settings from built-in defaults, the optional
//! `settings.kdl` file and `COMPOSE_DIFF_*` environment variables.
//! Command-line flags are applied on top by the dispatcher.

use crate::error::{ComposeDiffError, Result};
use crate::manifest::DEFAULT_ARCH;
use crate::project_identity;
use clap::ValueEnum;
use directories::ProjectDirs;
use kdl::{KdlDocument, KdlValue};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const DEFAULT_TIMEOUT_SECS: u64 = 300;

const VALID_KEYS: [&str; 6] = [
    "compose-root",
    "arch",
    "timeout",
    "format",
    "color",
    "allow-insecure-http",
];

/// Environment variable suffix -> setting key
const ENV_KEYS: [(&str, &str); 6] = [
    ("COMPOSE_ROOT", "compose-root"),
    ("ARCH", "arch"),
    ("TIMEOUT", "timeout"),
    ("FORMAT", "format"),
    ("COLOR", "color"),
    ("ALLOW_INSECURE_HTTP", "allow-insecure-http"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err("text, json, yaml".to_string()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("auto, always, never".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub compose_root: String,
    pub arch: String,
    pub timeout_secs: u64,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub allow_insecure_http: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compose_root: project_identity::DEFAULT_COMPOSE_ROOT.to_string(),
            arch: DEFAULT_ARCH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            format: OutputFormat::Text,
            color: ColorMode::Auto,
            allow_insecure_http: false,
        }
    }
}

impl Settings {
    /// Defaults, then the settings file, then the environment.
    ///
    /// An `explicit` file must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = Self::default();

        match explicit {
            Some(path) => settings.apply_file(path)?,
            None => {
                if let Some(path) = settings_file()
                    && path.exists()
                {
                    tracing::debug!(path = %path.display(), "loading settings file");
                    settings.apply_file(&path)?;
                }
            }
        }

        settings.apply_env(project_identity::env_get)?;
        Ok(settings)
    }

    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            ComposeDiffError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        self.apply_kdl(&content)
    }

    /// Apply a `settings { key value }` KDL document
    pub fn apply_kdl(&mut self, content: &str) -> Result<()> {
        let doc: KdlDocument = content.parse()?;

        for node in doc.nodes() {
            let node_name = node.name().value();
            if node_name != "settings" {
                return Err(ComposeDiffError::Config(format!(
                    "Unexpected node '{}' in settings file (expected 'settings {{ ... }}')",
                    node_name
                )));
            }

            let Some(children) = node.children() else {
                continue;
            };

            for child in children.nodes() {
                let key = child.name().value();
                let value = child
                    .entries()
                    .first()
                    .map(|entry| kdl_value_text(entry.value()))
                    .ok_or_else(|| {
                        ComposeDiffError::Config(format!("Setting '{}' has no value", key))
                    })?;
                self.set(key, &value)?;
            }
        }

        Ok(())
    }

    /// Apply `COMPOSE_DIFF_*` overrides using `lookup` for each suffix
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        for (suffix, key) in ENV_KEYS {
            if let Some(value) = lookup(suffix) {
                self.set(key, &value).map_err(|e| match e {
                    ComposeDiffError::Config(msg) => ComposeDiffError::Config(format!(
                        "{} (from {})",
                        msg,
                        project_identity::env_key(suffix)
                    )),
                    other => other,
                })?;
            }
        }

        Ok(())
    }

    /// Validate and store one setting
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let invalid = |valid: &str| {
            ComposeDiffError::Config(format!(
                "Invalid value for '{}': '{}'. Valid: {}",
                key, value, valid
            ))
        };

        match key {
            "compose-root" => {
                if value.is_empty() {
                    return Err(invalid("a URL or directory"));
                }
                self.compose_root = value.to_string();
            }
            "arch" => {
                if value.is_empty() || value.contains(char::is_whitespace) {
                    return Err(invalid("an architecture name such as x86_64 or aarch64"));
                }
                self.arch = value.to_string();
            }
            "timeout" => {
                self.timeout_secs = match value.parse::<u64>() {
                    Ok(secs) if secs > 0 => secs,
                    _ => return Err(invalid("a positive number of seconds")),
                };
            }
            "format" => self.format = value.parse().map_err(|valid: String| invalid(&valid))?,
            "color" => self.color = value.parse().map_err(|valid: String| invalid(&valid))?,
            "allow-insecure-http" => {
                self.allow_insecure_http = match value {
                    "true" | "1" => true,
                    "false" | "0" => false,
                    _ => return Err(invalid("true, false")),
                };
            }
            _ => {
                return Err(ComposeDiffError::Config(format!(
                    "Unknown setting: '{}'. Valid settings: {}",
                    key,
                    VALID_KEYS.join(", ")
                )));
            }
        }

        Ok(())
    }
}

/// Settings file path: `COMPOSE_DIFF_SETTINGS`, else the user config dir
pub fn settings_file() -> Option<PathBuf> {
    if let Some(path) = project_identity::env_get("SETTINGS") {
        return Some(PathBuf::from(path));
    }

    let proj = ProjectDirs::from("org", "fedoraproject", project_identity::CONFIG_DIR_NAME)?;
    Some(
        proj.config_dir()
            .join(project_identity::SETTINGS_FILE_BASENAME),
    )
}

fn kdl_value_text(value: &KdlValue) -> String {
    if let Some(s) = value.as_string() {
        s.to_string()
    } else if let Some(b) = value.as_bool() {
        b.to_string()
    } else if let Some(i) = value.as_integer() {
        i.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests;
