//! inistack - layered INI configuration
//!
//! An application ships its defaults in `config/global.ini`. Each site keeps
//! only the values it changed in `config/config.ini` (or in a per-host
//! `config/<host>.config.ini`). Reads merge the two layers section by
//! section; saves write back the minimal set of overrides and skip the write
//! when nothing changed.
//!
//! ```no_run
//! use inistack::{ConfigPaths, ConfigStore, LocalFs};
//!
//! let mut store = ConfigStore::new(LocalFs::new(), ConfigPaths::new("/srv/app"));
//! let timeout = store.option("General", "timeout")?;
//! store.set_option("General", "timeout", "30")?;
//! # let _ = timeout;
//! store.save()?;
//! # Ok::<(), inistack::StoreError>(())
//! ```

pub mod application;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{open, ConfigPaths, ConfigStore, SaveOutcome};
pub use codec::{parse_str, serialize};
pub use config::StoreSettings;
pub use domain::entities::{Document, Section};
pub use domain::ports::{FileSystem, HostResolver};
pub use domain::services::{array_unmerge, compare_elements, SavePlan};
pub use domain::value_objects::{ErrorMode, Hostname, Value};
pub use error::{StoreError, StoreResult};
pub use infrastructure::{EnvHost, FixedHost, LocalFs, MemoryFs, NoHost};
