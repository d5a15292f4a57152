//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;
mod memory;

pub use home::expand_home;
pub use local::LocalFs;
pub use memory::MemoryFs;
