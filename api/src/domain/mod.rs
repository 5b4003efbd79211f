//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `validation`: Field constraints and input parsing
//! - `earnings`: Aggregates derived from a driver's or passenger's trips
//! - `ports`: Trait definitions for external dependencies

pub mod earnings;
pub mod entities;
pub mod ports;
pub mod validation;
