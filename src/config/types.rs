//! Store settings type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::paths::{ConfigPaths, CONFIG_DIR, GLOBAL_CONFIG_FILE, LOCAL_CONFIG_FILE};
use crate::application::ConfigStore;
use crate::domain::value_objects::{ConfigWarning, ErrorMode};
use crate::error::StoreResult;
use crate::infrastructure::{expand_home, EnvHost, LocalFs};

use super::loader;

/// Where the config files live
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Installation root; relative values are resolved against the
    /// directory the settings were loaded for
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Config directory, relative to `root`
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    #[serde(default = "default_global_file")]
    pub global_file: String,

    #[serde(default = "default_local_file")]
    pub local_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            config_dir: default_config_dir(),
            global_file: default_global_file(),
            local_file: default_local_file(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_config_dir() -> PathBuf {
    PathBuf::from(CONFIG_DIR)
}

fn default_global_file() -> String {
    GLOBAL_CONFIG_FILE.to_string()
}

fn default_local_file() -> String {
    LOCAL_CONFIG_FILE.to_string()
}

/// Error reporting for unreadable files
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ErrorsConfig {
    #[serde(default)]
    pub mode: ErrorMode,
}

/// Per-host local config selection
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HostConfig {
    /// Environment variable holding the current hostname; unset disables
    /// per-host selection
    #[serde(default)]
    pub env_var: Option<String>,
}

/// Settings for the store itself (`inistack.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StoreSettings {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub errors: ErrorsConfig,

    #[serde(default)]
    pub host: HostConfig,
}

impl StoreSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> StoreResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StoreResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Settings for an installation root: `<root>/inistack.toml` if present,
    /// defaults otherwise, then environment overrides.
    pub fn load_or_default(root: &Path) -> Self {
        loader::load_or_default(root)
    }

    /// Apply environment variable overrides (INISTACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Resolved file layout
    pub fn config_paths(&self) -> ConfigPaths {
        ConfigPaths::new(expand_home(&self.paths.root))
            .with_config_dir(expand_home(&self.paths.config_dir))
            .with_global_file(self.paths.global_file.clone())
            .with_local_file(self.paths.local_file.clone())
    }

    /// A disk-backed store configured by these settings
    pub fn build_store(&self) -> ConfigStore<LocalFs> {
        let store = ConfigStore::new(LocalFs::new(), self.config_paths())
            .with_error_mode(self.errors.mode);
        match &self.host.env_var {
            Some(var) => store.with_host_resolver(EnvHost::new(var.clone())),
            None => store,
        }
    }
}
