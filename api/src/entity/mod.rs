//! SeaORM entity models
//!
//! Table definitions used by the PostgreSQL adapters. Domain code never
//! sees these; adapters convert them into `domain::entities` types.

pub mod drivers;
pub mod passengers;
pub mod trips;
