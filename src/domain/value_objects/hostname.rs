//! Hostname Value Object
//!
//! A hostname that is safe to embed in a configuration file name:
//! - Non-empty
//! - Starts with an ASCII letter or digit
//! - Only ASCII letters, digits, `_`, `.` and `-` afterwards
//!
//! This rejects path separators, NUL bytes, whitespace and anything else
//! that could steer the per-host file outside the config directory.

use std::fmt;

/// Suffix appended to a hostname to form its local override file name
pub const HOST_CONFIG_SUFFIX: &str = ".config.ini";

/// Returns true when `name` can be used as a file name component.
pub fn is_valid_filename(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// A validated hostname
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    /// Validate a raw hostname string
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if is_valid_filename(&raw) {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this host's local override file
    pub fn config_file_name(&self) -> String {
        format!("{}{}", self.0, HOST_CONFIG_SUFFIX)
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
