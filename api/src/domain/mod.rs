//! Domain layer
//!
//! Pricing rules and the storage interface they are read through.
//! - `entities`: Rate rules and their encoded formats
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
