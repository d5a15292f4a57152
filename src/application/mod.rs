//! Application Layer
//!
//! Orchestrates the layered configuration on top of the domain services
//! and the file system port.
//!
//! ## Components
//!
//! - `ConfigPaths` - Where the global and local files live
//! - `ConfigStore` - Read, modify and save the merged configuration
//! - `open` - Disk-backed store configured from `inistack.toml`

mod bootstrap;
pub mod paths;
pub mod store;

pub use bootstrap::open;
pub use paths::ConfigPaths;
pub use store::{ConfigStore, SaveOutcome};
