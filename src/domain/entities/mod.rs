//! Domain Entities
//!
//! - `Section` - key/value block of a config file
//! - `Document` - ordered set of named sections (one config file)

mod document;
mod section;

pub use document::Document;
pub use section::Section;
