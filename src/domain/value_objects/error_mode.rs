//! Error Mode Value Object
//!
//! Decides what happens when a configuration file cannot be read.

use serde::{Deserialize, Serialize};

/// How unreadable configuration files are reported
///
/// - `Strict`: surface `ConfigFileNotFound` to the caller (default)
/// - `Lenient`: log a warning and continue with an empty document
///
/// Lenient mode exists for lightweight request paths where failing hard is
/// worse than running on defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    #[default]
    Strict,
    Lenient,
}

impl ErrorMode {
    pub fn is_strict(self) -> bool {
        matches!(self, ErrorMode::Strict)
    }

    /// Parse a user-supplied mode name, `None` when unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "strict" => Some(ErrorMode::Strict),
            "lenient" => Some(ErrorMode::Lenient),
            _ => None,
        }
    }
}
