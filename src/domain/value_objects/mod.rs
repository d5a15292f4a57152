//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod error_mode;
mod hostname;
mod value;

pub use config_warning::ConfigWarning;
pub use error_mode::ErrorMode;
pub use hostname::{is_valid_filename, Hostname, HOST_CONFIG_SUFFIX};
pub use value::Value;
