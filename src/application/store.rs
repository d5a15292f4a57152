//! Layered configuration store
//!
//! Holds three documents:
//! - `global`: shipped defaults, read-only
//! - `local`: site overrides, the only file ever written
//! - `cache`: the runtime view, i.e. sections resolved on read plus explicit
//!   `set_section` calls since the last save
//!
//! Reads resolve `merge(global[S], local[S])` once and cache the result.
//! Saving writes back only the values that differ from the defaults and
//! skips the write entirely when nothing changed.
//!
//! There is no process-wide instance: the host creates one store at startup
//! and passes it to whatever needs configuration.

use std::path::{Path, PathBuf};

use crate::application::paths::ConfigPaths;
use crate::codec;
use crate::domain::entities::{Document, Section};
use crate::domain::ports::{FileSystem, FsError, HostResolver};
use crate::domain::services::{merge_sections, plan_save, DiffResult, Differ, SavePlan};
use crate::domain::value_objects::{ErrorMode, Hostname, Value};
use crate::error::{StoreError, StoreResult};
use crate::infrastructure::NoHost;

/// What `save` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The local file was rewritten
    Written(PathBuf),
    /// No section was dirty; the file was left alone
    Unchanged,
}

impl SaveOutcome {
    pub fn was_written(&self) -> bool {
        matches!(self, SaveOutcome::Written(_))
    }
}

pub struct ConfigStore<F: FileSystem> {
    fs: F,
    resolver: Box<dyn HostResolver>,
    paths: ConfigPaths,
    mode: ErrorMode,
    local_path: PathBuf,
    /// Local path was set by `force_hostname` and may not exist yet
    forced_host: bool,
    global: Document,
    local: Document,
    cache: Document,
    initialized: bool,
}

impl<F: FileSystem> ConfigStore<F> {
    /// Create a store in strict mode with no hostname selection.
    ///
    /// Nothing is read until the first access.
    pub fn new(fs: F, paths: ConfigPaths) -> Self {
        let local_path = paths.default_local_path();
        Self {
            fs,
            resolver: Box::new(NoHost),
            paths,
            mode: ErrorMode::default(),
            local_path,
            forced_host: false,
            global: Document::new(),
            local: Document::new(),
            cache: Document::new(),
            initialized: false,
        }
    }

    pub fn with_host_resolver(mut self, resolver: impl HostResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self.local_path = self.derive_local_path();
        self
    }

    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.mode
    }

    pub fn global_path(&self) -> PathBuf {
        self.paths.global_path()
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Raw global layer as currently held in memory (does not load)
    pub fn global_document(&self) -> &Document {
        &self.global
    }

    /// Raw local layer as currently held in memory (does not load)
    pub fn local_document(&self) -> &Document {
        &self.local
    }

    /// Read the global and local files.
    ///
    /// No-op once loaded; `clear` and `force_hostname` make the next call
    /// read again. On failure nothing in memory changes.
    pub fn load(&mut self) -> StoreResult<()> {
        if self.initialized {
            return Ok(());
        }

        let global = codec::parse_file(&self.fs, &self.paths.global_path(), self.mode)?;
        let local = if self.forced_host && !self.fs.exists(&self.local_path) {
            tracing::debug!(
                path = %self.local_path.display(),
                "forced per-host config does not exist yet, starting empty"
            );
            Document::new()
        } else {
            codec::parse_file(&self.fs, &self.local_path, self.mode)?
        };

        tracing::debug!(
            global_sections = global.len(),
            local_sections = local.len(),
            local = %self.local_path.display(),
            "configuration loaded"
        );

        self.global = global;
        self.local = local;
        self.initialized = true;
        Ok(())
    }

    /// Effective value of a section: global defaults overlaid with local
    /// overrides.
    ///
    /// The result is a copy. Changing it has no effect until it is handed
    /// back through [`set_section`](Self::set_section).
    pub fn section(&mut self, name: &str) -> StoreResult<Section> {
        self.load()?;

        if let Some(cached) = self.cache.get(name) {
            return Ok(cached.clone());
        }

        let merged = merge_sections(self.global.get(name), self.local.get(name)).ok_or_else(
            || StoreError::UndefinedSection {
                name: name.to_string(),
            },
        )?;

        for info in &merged.overrides {
            tracing::trace!(section = name, key = %info.key, "local value overrides default");
        }

        self.cache.insert(name, merged.section.clone());
        Ok(merged.section)
    }

    /// Replace the runtime value of a whole section.
    ///
    /// Bypasses merging; the next `save` diffs it against the defaults.
    pub fn set_section(&mut self, name: &str, section: Section) {
        self.cache.insert(name, section);
    }

    /// Single option of a section; `UndefinedSection` if the section is unknown.
    pub fn option(&mut self, section: &str, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.section(section)?.get(key).cloned())
    }

    /// Set a single option, creating the section if neither layer has it.
    ///
    /// An empty list cannot be written to the file format, so it never
    /// counts as an override: after the next save the default comes back.
    pub fn set_option(
        &mut self,
        section: &str,
        key: &str,
        value: impl Into<Value>,
    ) -> StoreResult<()> {
        let mut current = match self.section(section) {
            Ok(current) => current,
            Err(StoreError::UndefinedSection { .. }) => Section::new(),
            Err(e) => return Err(e),
        };
        current.insert(key, value);
        self.set_section(section, current);
        Ok(())
    }

    pub fn has_section(&mut self, name: &str) -> StoreResult<bool> {
        self.load()?;
        Ok(self.cache.contains(name) || self.global.contains(name) || self.local.contains(name))
    }

    /// Section as defined by the defaults only
    pub fn global_section(&mut self, name: &str) -> StoreResult<Option<Section>> {
        self.load()?;
        Ok(self.global.get(name).cloned())
    }

    /// Section as stored in the local override file only
    pub fn local_section(&mut self, name: &str) -> StoreResult<Option<Section>> {
        self.load()?;
        Ok(self.local.get(name).cloned())
    }

    /// Drop all three documents and re-pick the local file for the current
    /// hostname. The next access reads from disk again.
    pub fn clear(&mut self) {
        self.global = Document::new();
        self.local = Document::new();
        self.cache = Document::new();
        self.initialized = false;
        self.forced_host = false;
        self.local_path = self.derive_local_path();
    }

    /// Work out which sections must be rewritten.
    pub fn plan(&mut self) -> StoreResult<SavePlan> {
        self.load()?;
        Ok(plan_save(&self.global, &self.local, &self.cache))
    }

    /// Text the local file should contain, or `None` when it is up to date.
    pub fn dump(&mut self) -> StoreResult<Option<String>> {
        let plan = self.plan()?;
        if !plan.is_dirty() {
            return Ok(None);
        }

        for section in plan.dirty_sections() {
            tracing::debug!(section = %section.name, "section changed");
        }
        Ok(Some(codec::serialize(&plan.to_document())))
    }

    /// Write changed overrides to the local file.
    ///
    /// Skips the write when nothing is dirty. Either way the store is cleared
    /// afterwards so the next read reflects the file. A failed write returns
    /// `ConfigFileNotWritable` and keeps the in-memory state.
    pub fn save(&mut self) -> StoreResult<SaveOutcome> {
        let outcome = match self.dump()? {
            None => {
                tracing::debug!(path = %self.local_path.display(), "configuration unchanged, skipping write");
                SaveOutcome::Unchanged
            }
            Some(text) => {
                self.fs.write(&self.local_path, &text).map_err(|e| {
                    tracing::warn!(path = %self.local_path.display(), error = %e, "could not write local configuration");
                    StoreError::ConfigFileNotWritable {
                        path: self.paths.relative_to_root(&self.local_path),
                    }
                })?;
                tracing::info!(path = %self.local_path.display(), "local configuration saved");
                SaveOutcome::Written(self.local_path.clone())
            }
        };

        self.clear();
        Ok(outcome)
    }

    /// Line diff between the local file and what `save` would write;
    /// `None` when there is nothing to save.
    pub fn preview_save(&mut self) -> StoreResult<Option<DiffResult>> {
        let Some(text) = self.dump()? else {
            return Ok(None);
        };
        let current = match self.fs.read(&self.local_path) {
            Ok(text) => text,
            Err(FsError::NotFound(_)) => String::new(),
            Err(err) => return Err(StoreError::from_read(self.local_path.clone(), err)),
        };
        Ok(Some(Differ::new().diff(&current, &text)))
    }

    pub fn local_exists(&self) -> bool {
        self.fs.exists(&self.local_path)
    }

    /// Remove the local override file, returning whether there was one.
    ///
    /// The store is cleared so the next read sees defaults only.
    pub fn delete_local(&mut self) -> StoreResult<bool> {
        if !self.fs.exists(&self.local_path) {
            return Ok(false);
        }
        self.fs.remove(&self.local_path).map_err(|e| {
            tracing::warn!(path = %self.local_path.display(), error = %e, "could not delete local configuration");
            StoreError::ConfigFileNotWritable {
                path: self.paths.relative_to_root(&self.local_path),
            }
        })?;
        tracing::info!(path = %self.local_path.display(), "local configuration deleted");
        self.clear();
        Ok(true)
    }

    /// Switch the local file to the one belonging to `host`.
    ///
    /// The hostname is validated first; on failure nothing changes. The
    /// per-host file does not need to exist yet, even in strict mode; a later
    /// `save` creates it.
    /// The in-memory local document is emptied and reloaded on next access;
    /// defaults and the runtime cache are kept.
    pub fn force_hostname(&mut self, host: &str) -> StoreResult<PathBuf> {
        let hostname = Hostname::parse(host).ok_or_else(|| StoreError::InvalidHostname {
            hostname: host.to_string(),
        })?;

        self.local_path = self.paths.host_local_path(&hostname);
        self.forced_host = true;
        self.local = Document::new();
        self.initialized = false;

        tracing::info!(host = %hostname, path = %self.local_path.display(), "forced per-host local configuration");
        Ok(self.local_path.clone())
    }

    fn derive_local_path(&self) -> PathBuf {
        let host = self.resolver.current_host();
        self.paths.select_local(&self.fs, host.as_deref())
    }
}

impl<F: FileSystem + std::fmt::Debug> std::fmt::Debug for ConfigStore<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("fs", &self.fs)
            .field("paths", &self.paths)
            .field("mode", &self.mode)
            .field("local_path", &self.local_path)
            .field("forced_host", &self.forced_host)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
