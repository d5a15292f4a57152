//! Isolated test environment backed by a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use inistack::{ConfigPaths, ConfigStore, ErrorMode, FixedHost, LocalFs};
use tempfile::TempDir;

/// An installation root with a `config/` directory.
///
/// Everything is removed when the value is dropped.
pub struct TestEnv {
    root: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp root");
        fs::create_dir_all(root.path().join("config")).expect("create config dir");
        Self { root }
    }

    /// Environment whose global file holds `content`
    pub fn with_global(content: &str) -> Self {
        let env = Self::new();
        env.write_config("global.ini", content);
        env
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn config_path(&self, name: &str) -> PathBuf {
        self.root().join("config").join(name)
    }

    pub fn write_config(&self, name: &str, content: &str) {
        fs::write(self.config_path(name), content).expect("write config file");
    }

    pub fn read_config(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.config_path(name)).ok()
    }

    pub fn local_exists(&self) -> bool {
        self.config_path("config.ini").is_file()
    }

    pub fn paths(&self) -> ConfigPaths {
        ConfigPaths::new(self.root())
    }

    /// Strict store with no hostname selection
    pub fn store(&self) -> ConfigStore<LocalFs> {
        ConfigStore::new(LocalFs::new(), self.paths())
    }

    /// Lenient store, for roots without a local file
    pub fn lenient_store(&self) -> ConfigStore<LocalFs> {
        self.store().with_error_mode(ErrorMode::Lenient)
    }

    /// Lenient store that resolves the current host to `host`
    pub fn store_for_host(&self, host: &str) -> ConfigStore<LocalFs> {
        self.lenient_store().with_host_resolver(FixedHost::new(host))
    }
}
