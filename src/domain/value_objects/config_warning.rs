//! Settings warning value object.

use std::path::PathBuf;

/// Non-fatal warning raised while loading store settings.
///
/// Produced for unknown keys in `inistack.toml` so typos are reported
/// instead of silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    /// The settings file containing it
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    /// Closest known key, if one is near enough
    pub suggestion: Option<String>,
}
