//! Domain Layer
//!
//! Pure configuration logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `Section` and `Document`
//! - `value_objects/` - `Value`, `Hostname`, `ErrorMode`
//! - `services/` - diff, merge and save planning
//! - `ports/` - interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
