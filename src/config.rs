//! Server configuration.
//!
//! Layered lowest to highest: built-in defaults, the TOML config file,
//! `FUSIONKIT_DOCS_*` environment variables, then command-line flags.

use crate::error::Result;
use crate::retrieval::DEFAULT_FRAMEWORK;
use anyhow::Context;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Directory under the platform config dir holding `config.toml`.
const CONFIG_DIR_NAME: &str = "fusionkit-docs-mcp";

pub const ENV_DOCS_PATH: &str = "FUSIONKIT_DOCS_PATH";
pub const ENV_CACHE: &str = "FUSIONKIT_DOCS_CACHE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root of the markdown documentation tree
    pub docs_path: PathBuf,
    /// Reuse the last index while the tree fingerprint is unchanged
    pub cache: bool,
    /// Framework for code examples when the caller names none
    pub default_framework: String,
    /// Scaffolding CLI executable
    pub cli_binary: String,
    /// Run `npm install` in freshly scaffolded shell and mfe projects
    pub install_dependencies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_path: PathBuf::from("./docs"),
            cache: false,
            default_framework: DEFAULT_FRAMEWORK.to_string(),
            cli_binary: "fk".to_string(),
            install_dependencies: false,
        }
    }
}

impl Config {
    /// Loads the config file (explicit path, else the platform default if it
    /// exists) and applies environment overrides.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parses a TOML config file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.docs_path = expand_path(&config.docs_path);

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Applies environment-style overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_DOCS_PATH).filter(|v| !v.is_empty()) {
            self.docs_path = PathBuf::from(expand_tilde(&path).into_owned());
        }
        if let Some(value) = lookup(ENV_CACHE) {
            match parse_flag(&value) {
                Some(enabled) => self.cache = enabled,
                None => tracing::warn!("Ignoring invalid {} value: {}", ENV_CACHE, value),
            }
        }
    }
}

/// `<config dir>/fusionkit-docs-mcp/config.toml`, when the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(expand_tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
