//! Text codec for the INI dialect used by global and local config files.
//!
//! ```text
//! [General]
//! timeout = 5
//! name = "My Site"
//!
//! [Plugins]
//! Plugins[] = "A"
//! Plugins[] = "B"
//! ```

mod parser;
mod serializer;

pub use parser::{parse_file, parse_str, ParseWarning, ParsedDocument};
pub use serializer::{format_scalar, is_numeric, serialize, HEADER};
