//! Common test utilities for inistack contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated installation root in a temp directory
//! - Fixtures: Reusable INI content constants

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
