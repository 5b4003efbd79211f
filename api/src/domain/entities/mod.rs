//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod driver;
pub mod passenger;
pub mod trip;

pub use driver::{Driver, DriverDraft, DriverFields, DriverId, DriverPatch};
pub use passenger::{Passenger, PassengerDraft, PassengerFields, PassengerId, PassengerPatch};
pub use trip::{Trip, TripDraft, TripFields, TripId, TripPatch};
