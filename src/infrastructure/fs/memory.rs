//! In-memory File System
//!
//! Keeps files in a map. Used by tests and by hosts that embed their
//! configuration instead of reading it from disk.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    read_only: RefCell<BTreeSet<PathBuf>>,
    unreadable: RefCell<BTreeSet<PathBuf>>,
    writes: Cell<usize>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style file seeding
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), content.into());
        self
    }

    /// Make writes to `path` fail with permission denied
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        self.read_only.borrow_mut().insert(path.into());
    }

    /// Make reads of `path` fail with permission denied
    pub fn deny_reads(&self, path: impl Into<PathBuf>) {
        self.unreadable.borrow_mut().insert(path.into());
    }

    /// Current content of `path`
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        if self.unreadable.borrow().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.contents(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.read_only.borrow().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}
