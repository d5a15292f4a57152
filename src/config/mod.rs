//! Settings for the store itself
//!
//! Resolution order:
//! 1. Environment variables (INISTACK_*)
//! 2. `<root>/inistack.toml`
//! 3. Built-in defaults (`config/global.ini`, `config/config.ini`, strict mode)
//!
//! These settings only say where the layered INI files live and how to
//! treat read failures; the INI files themselves are handled by
//! [`crate::application::ConfigStore`].

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::SETTINGS_FILE;
pub use types::{ErrorsConfig, HostConfig, PathsConfig, StoreSettings};

/// Serializes tests that read or write INISTACK_* variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
