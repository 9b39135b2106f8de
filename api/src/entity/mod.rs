//! SeaORM entities
//!
//! Table definitions for the persistence adapters. Domain code works with
//! `crate::domain::entities` and never sees these types.

pub mod rates;
