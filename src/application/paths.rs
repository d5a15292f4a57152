//! Config file locations
//!
//! The global (default) file is fixed under the installation root. The local
//! (override) file is `config/config.ini`, unless the current hostname is a
//! safe file name and `config/<host>.config.ini` exists, in which case that
//! per-host file is used. This lets several virtual hosts share one install.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Hostname;

pub const CONFIG_DIR: &str = "config";
pub const GLOBAL_CONFIG_FILE: &str = "global.ini";
pub const LOCAL_CONFIG_FILE: &str = "config.ini";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf,
    config_dir: PathBuf,
    global_file: String,
    local_file: String,
}

impl ConfigPaths {
    /// Default layout under an installation root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_dir: root.join(CONFIG_DIR),
            root,
            global_file: GLOBAL_CONFIG_FILE.to_string(),
            local_file: LOCAL_CONFIG_FILE.to_string(),
        }
    }

    /// Config directory; relative paths are resolved against the root.
    pub fn with_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = self.root.join(dir);
        self
    }

    pub fn with_global_file(mut self, name: impl Into<String>) -> Self {
        self.global_file = name.into();
        self
    }

    pub fn with_local_file(mut self, name: impl Into<String>) -> Self {
        self.local_file = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn global_path(&self) -> PathBuf {
        self.config_dir.join(&self.global_file)
    }

    pub fn default_local_path(&self) -> PathBuf {
        self.config_dir.join(&self.local_file)
    }

    /// Local file dedicated to `host`, whether or not it exists
    pub fn host_local_path(&self, host: &Hostname) -> PathBuf {
        self.config_dir.join(host.config_file_name())
    }

    /// Pick the local file for the current hostname.
    ///
    /// Falls back to the default local path when there is no hostname, the
    /// hostname is not a safe file name, or it has no file of its own.
    pub fn select_local<F: FileSystem + ?Sized>(&self, fs: &F, host: Option<&str>) -> PathBuf {
        let Some(raw) = host else {
            return self.default_local_path();
        };
        let Some(hostname) = Hostname::parse(raw) else {
            tracing::debug!(host = raw, "hostname is not a safe file name, using default local config");
            return self.default_local_path();
        };

        let candidate = self.host_local_path(&hostname);
        if fs.exists(&candidate) {
            tracing::debug!(path = %candidate.display(), "using per-host local config");
            candidate
        } else {
            self.default_local_path()
        }
    }

    /// `path` relative to the installation root, for user-facing messages
    pub fn relative_to_root(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
