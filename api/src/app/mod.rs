//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod driver_service;
pub mod passenger_service;
pub mod trip_service;

pub use driver_service::{DriverService, DriverSummary};
pub use passenger_service::{PassengerDetail, PassengerService};
pub use trip_service::TripService;
