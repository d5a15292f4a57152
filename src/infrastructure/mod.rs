//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `host` - Hostname resolvers

pub mod fs;
pub mod host;

pub use fs::{expand_home, LocalFs, MemoryFs};
pub use host::{EnvHost, FixedHost, NoHost};
