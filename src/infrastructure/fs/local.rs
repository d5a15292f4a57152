//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temp file in the target directory and are renamed into
/// place while holding an exclusive advisory lock on `<file>.lock`, so a
/// reader never sees a half-written config and two savers serialize.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let lock_path = lock_path_for(path);
        let lock_file = std::fs::File::create(&lock_path).map_err(|e| FsError::at(&lock_path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| FsError::at(&lock_path, e))?;

        let result = atomic_write(parent, path, content);

        if let Err(e) = FileExt::unlock(&lock_file) {
            tracing::debug!(path = %lock_path.display(), error = %e, "could not release config lock");
        }
        result
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::at(path, e))
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

fn atomic_write(dir: &Path, path: &Path, content: &str) -> FsResult<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::at(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| FsError::at(path, e))?;
    tmp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;
    tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}
