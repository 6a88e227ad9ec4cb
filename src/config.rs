//! Settings loading.
//!
//! The shell ancestor of this tool exported a couple of environment
//! variables (cask install directory, nvm root) that every later command
//! inherited implicitly. Here they are explicit configuration: a small
//! [`Settings`] struct with defaults, optionally overridden from a YAML
//! file, passed into the operations that need the values.

use crate::error::{BasecampError, Result};
use crate::shell::home_dir;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Run-wide settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory casks link applications into.
    #[serde(default = "default_cask_appdir")]
    pub cask_appdir: PathBuf,

    /// Directory the nvm installer script targets.
    #[serde(default = "default_nvm_dir")]
    pub nvm_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cask_appdir: default_cask_appdir(),
            nvm_dir: default_nvm_dir(),
        }
    }
}

fn default_cask_appdir() -> PathBuf {
    PathBuf::from("/Applications")
}

fn default_nvm_dir() -> PathBuf {
    home_dir().join(".nvm")
}

/// Default settings file location.
pub fn default_settings_path() -> PathBuf {
    home_dir().join(".config/basecamp/config.yml")
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit `path` must exist and parse. The default location is
    /// allowed to be absent, in which case defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::from_file(explicit),
            None => {
                let default = default_settings_path();
                if default.is_file() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&raw).map_err(|e| BasecampError::SettingsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
