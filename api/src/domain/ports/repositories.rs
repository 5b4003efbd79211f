//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! A lookup that misses returns `Ok(None)` and a delete that misses returns
//! `Ok(false)`; turning those into `DomainError::NotFound` is the caller's job.

use async_trait::async_trait;

use crate::domain::entities::{
    Driver, DriverFields, DriverId, Passenger, PassengerFields, PassengerId, Trip, TripFields,
    TripId,
};
use crate::error::DomainError;

/// Repository for Passenger entities
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    /// Find a passenger by ID
    async fn find_by_id(&self, id: &PassengerId) -> Result<Option<Passenger>, DomainError>;

    /// All passengers, oldest first
    async fn all(&self) -> Result<Vec<Passenger>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Create a new passenger
    async fn create(&self, fields: &PassengerFields) -> Result<Passenger, DomainError>;

    /// Overwrite every attribute of an existing passenger
    async fn update(
        &self,
        id: &PassengerId,
        fields: &PassengerFields,
    ) -> Result<Option<Passenger>, DomainError>;

    /// Delete a passenger. Returns whether a row was removed.
    async fn delete(&self, id: &PassengerId) -> Result<bool, DomainError>;
}

/// Repository for Driver entities
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Find a driver by ID
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, DomainError>;

    /// All drivers, oldest first
    async fn all(&self) -> Result<Vec<Driver>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// The longest-registered driver currently available
    async fn find_first_available(&self) -> Result<Option<Driver>, DomainError>;

    /// Create a new driver
    async fn create(&self, fields: &DriverFields) -> Result<Driver, DomainError>;

    /// Overwrite every attribute of an existing driver
    async fn update(
        &self,
        id: &DriverId,
        fields: &DriverFields,
    ) -> Result<Option<Driver>, DomainError>;

    /// Update availability only
    async fn set_available(
        &self,
        id: &DriverId,
        available: bool,
    ) -> Result<Option<Driver>, DomainError>;

    /// Delete a driver. Returns whether a row was removed.
    async fn delete(&self, id: &DriverId) -> Result<bool, DomainError>;
}

/// Repository for Trip entities
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Find a trip by ID
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError>;

    /// All trips, oldest first
    async fn all(&self) -> Result<Vec<Trip>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Trips driven by a driver
    async fn find_by_driver(&self, driver_id: &DriverId) -> Result<Vec<Trip>, DomainError>;

    /// Trips taken by a passenger
    async fn find_by_passenger(
        &self,
        passenger_id: &PassengerId,
    ) -> Result<Vec<Trip>, DomainError>;

    /// Create a new trip
    async fn create(&self, fields: &TripFields) -> Result<Trip, DomainError>;

    /// Overwrite every attribute of an existing trip
    async fn update(&self, id: &TripId, fields: &TripFields) -> Result<Option<Trip>, DomainError>;

    /// Delete a trip. Returns whether a row was removed.
    async fn delete(&self, id: &TripId) -> Result<bool, DomainError>;
}
