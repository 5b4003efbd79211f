//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Driver, DriverFields, DriverId, Passenger, PassengerFields, PassengerId, Trip, TripFields,
    TripId,
};
use crate::domain::ports::{DriverRepository, PassengerRepository, TripRepository};
use crate::error::DomainError;
use crate::Store;

// ============================================================================
// Shared table
// ============================================================================

/// Rows keyed by id, with Postgres-style sequential id assignment
struct Table<T> {
    rows: Arc<RwLock<BTreeMap<i64, T>>>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    fn seed(&self, id: i64, row: T) {
        self.rows.write().unwrap().insert(id, row);
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
    }

    fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = build(id);
        self.rows.write().unwrap().insert(id, row.clone());
        row
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.read().unwrap().get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.read().unwrap().values().cloned().collect()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .unwrap()
            .values()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    fn len(&self) -> u64 {
        self.rows.read().unwrap().len() as u64
    }

    fn modify(&self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.write().unwrap();
        let row = rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    fn remove(&self, id: i64) -> bool {
        self.rows.write().unwrap().remove(&id).is_some()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

// ============================================================================
// In-Memory Passenger Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPassengerRepository {
    passengers: Table<Passenger>,
}

impl InMemoryPassengerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a passenger for testing
    pub fn with_passenger(self, passenger: Passenger) -> Self {
        self.passengers.seed(passenger.id.0, passenger);
        self
    }
}

#[async_trait]
impl PassengerRepository for InMemoryPassengerRepository {
    async fn find_by_id(&self, id: &PassengerId) -> Result<Option<Passenger>, DomainError> {
        Ok(self.passengers.get(id.0))
    }

    async fn all(&self) -> Result<Vec<Passenger>, DomainError> {
        Ok(self.passengers.all())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.passengers.len())
    }

    async fn create(&self, fields: &PassengerFields) -> Result<Passenger, DomainError> {
        Ok(self.passengers.insert_with(|id| Passenger {
            id: PassengerId(id),
            name: fields.name.clone(),
            phone_num: fields.phone_num.clone(),
        }))
    }

    async fn update(
        &self,
        id: &PassengerId,
        fields: &PassengerFields,
    ) -> Result<Option<Passenger>, DomainError> {
        Ok(self.passengers.modify(id.0, |p| {
            p.name = fields.name.clone();
            p.phone_num = fields.phone_num.clone();
        }))
    }

    async fn delete(&self, id: &PassengerId) -> Result<bool, DomainError> {
        Ok(self.passengers.remove(id.0))
    }
}

// ============================================================================
// In-Memory Driver Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryDriverRepository {
    drivers: Table<Driver>,
}

impl InMemoryDriverRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a driver for testing
    pub fn with_driver(self, driver: Driver) -> Self {
        self.drivers.seed(driver.id.0, driver);
        self
    }
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, DomainError> {
        Ok(self.drivers.get(id.0))
    }

    async fn all(&self) -> Result<Vec<Driver>, DomainError> {
        Ok(self.drivers.all())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.drivers.len())
    }

    async fn find_first_available(&self) -> Result<Option<Driver>, DomainError> {
        Ok(self.drivers.filter(|d| d.available).into_iter().next())
    }

    async fn create(&self, fields: &DriverFields) -> Result<Driver, DomainError> {
        Ok(self.drivers.insert_with(|id| Driver {
            id: DriverId(id),
            name: fields.name.clone(),
            vin: fields.vin.clone(),
            available: fields.available,
        }))
    }

    async fn update(
        &self,
        id: &DriverId,
        fields: &DriverFields,
    ) -> Result<Option<Driver>, DomainError> {
        Ok(self.drivers.modify(id.0, |d| {
            d.name = fields.name.clone();
            d.vin = fields.vin.clone();
            d.available = fields.available;
        }))
    }

    async fn set_available(
        &self,
        id: &DriverId,
        available: bool,
    ) -> Result<Option<Driver>, DomainError> {
        Ok(self.drivers.modify(id.0, |d| d.available = available))
    }

    async fn delete(&self, id: &DriverId) -> Result<bool, DomainError> {
        Ok(self.drivers.remove(id.0))
    }
}

// ============================================================================
// In-Memory Trip Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTripRepository {
    trips: Table<Trip>,
}

impl InMemoryTripRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a trip for testing
    pub fn with_trip(self, trip: Trip) -> Self {
        self.trips.seed(trip.id.0, trip);
        self
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        Ok(self.trips.get(id.0))
    }

    async fn all(&self) -> Result<Vec<Trip>, DomainError> {
        Ok(self.trips.all())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.trips.len())
    }

    async fn find_by_driver(&self, driver_id: &DriverId) -> Result<Vec<Trip>, DomainError> {
        Ok(self.trips.filter(|t| t.driver_id == *driver_id))
    }

    async fn find_by_passenger(
        &self,
        passenger_id: &PassengerId,
    ) -> Result<Vec<Trip>, DomainError> {
        Ok(self.trips.filter(|t| t.passenger_id == *passenger_id))
    }

    async fn create(&self, fields: &TripFields) -> Result<Trip, DomainError> {
        Ok(self.trips.insert_with(|id| Trip {
            id: TripId(id),
            driver_id: fields.driver_id,
            passenger_id: fields.passenger_id,
            date: fields.date,
            rating: fields.rating,
            cost: fields.cost,
        }))
    }

    async fn update(&self, id: &TripId, fields: &TripFields) -> Result<Option<Trip>, DomainError> {
        Ok(self.trips.modify(id.0, |t| {
            t.driver_id = fields.driver_id;
            t.passenger_id = fields.passenger_id;
            t.date = fields.date;
            t.rating = fields.rating;
            t.cost = fields.cost;
        }))
    }

    async fn delete(&self, id: &TripId) -> Result<bool, DomainError> {
        Ok(self.trips.remove(id.0))
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Store wiring the in-memory repositories into `AppState`
pub struct InMemoryStore;

impl Store for InMemoryStore {
    type Passengers = InMemoryPassengerRepository;
    type Drivers = InMemoryDriverRepository;
    type Trips = InMemoryTripRepository;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_driver, test_driver_with};

    #[tokio::test]
    async fn seeded_ids_are_not_reused() {
        let repo = InMemoryDriverRepository::new().with_driver(test_driver());

        let created = repo
            .create(&DriverFields {
                name: "Kari".to_string(),
                vin: "123".to_string(),
                available: true,
            })
            .await
            .unwrap();

        assert_eq!(created.id, DriverId(21));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn first_available_is_lowest_id() {
        let repo = InMemoryDriverRepository::new()
            .with_driver(test_driver_with(3, true))
            .with_driver(test_driver_with(1, false))
            .with_driver(test_driver_with(2, true));

        let found = repo.find_first_available().await.unwrap().unwrap();
        assert_eq!(found.id, DriverId(2));
    }

    #[tokio::test]
    async fn delete_missing_reports_false() {
        let repo = InMemoryTripRepository::new();
        assert!(!repo.delete(&TripId(-1)).await.unwrap());
    }
}
