//! Home directory expansion for user-supplied paths.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory.
///
/// Paths not starting with `~` (and any path when the home directory is
/// unknown) are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
