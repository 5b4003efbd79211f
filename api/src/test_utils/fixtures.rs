//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;

use crate::domain::entities::{
    Driver, DriverId, Passenger, PassengerId, Trip, TripDraft, TripId,
};
use crate::domain::validation::NumericInput;
use crate::handlers;
use crate::test_utils::mocks::{
    InMemoryDriverRepository, InMemoryPassengerRepository, InMemoryStore, InMemoryTripRepository,
};
use crate::AppState;

pub const TEST_DRIVER_ID: i64 = 20;
pub const TEST_PASSENGER_ID: i64 = 57;

/// Fixed "today" for services under test
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// Create a test passenger with default values
pub fn test_passenger() -> Passenger {
    Passenger {
        id: PassengerId(TEST_PASSENGER_ID),
        name: "Anna Laura".to_string(),
        phone_num: "999-999-0000".to_string(),
    }
}

/// Create a test passenger with a specific id and name
pub fn test_passenger_named(id: i64, name: &str) -> Passenger {
    Passenger {
        id: PassengerId(id),
        name: name.to_string(),
        phone_num: format!("555-000-{:04}", id),
    }
}

/// Create a test driver with default values
pub fn test_driver() -> Driver {
    Driver {
        id: DriverId(TEST_DRIVER_ID),
        name: "John Meyer".to_string(),
        vin: "WEE7868967777".to_string(),
        available: true,
    }
}

/// Create a test driver with a specific id and availability
pub fn test_driver_with(id: i64, available: bool) -> Driver {
    Driver {
        id: DriverId(id),
        name: format!("Driver {}", id),
        vin: format!("VIN{:010}", id),
        available,
    }
}

/// Create a trip between the default driver and passenger
pub fn test_trip(id: i64, rating: Option<f64>, cost: f64) -> Trip {
    test_trip_between(id, TEST_DRIVER_ID, TEST_PASSENGER_ID, rating, cost)
}

/// Create a trip between a specific driver and passenger
pub fn test_trip_between(
    id: i64,
    driver_id: i64,
    passenger_id: i64,
    rating: Option<f64>,
    cost: f64,
) -> Trip {
    Trip {
        id: TripId(id),
        driver_id: DriverId(driver_id),
        passenger_id: PassengerId(passenger_id),
        date: NaiveDate::from_ymd_opt(2020, 11, 5).unwrap(),
        rating,
        cost,
    }
}

/// Trip input referencing the default driver and passenger
pub fn test_trip_draft(date: &str, cost: f64) -> TripDraft {
    TripDraft {
        driver_id: Some(DriverId(TEST_DRIVER_ID)),
        passenger_id: Some(PassengerId(TEST_PASSENGER_ID)),
        date: Some(date.to_string()),
        cost: Some(NumericInput::Number(cost)),
        rating: None,
    }
}

/// A running router over in-memory repositories.
/// The repositories stay reachable so tests can inspect what was stored.
pub struct TestApp {
    pub server: TestServer,
    pub passengers: Arc<InMemoryPassengerRepository>,
    pub drivers: Arc<InMemoryDriverRepository>,
    pub trips: Arc<InMemoryTripRepository>,
}

pub fn test_app(
    passengers: InMemoryPassengerRepository,
    drivers: InMemoryDriverRepository,
    trips: InMemoryTripRepository,
) -> TestApp {
    let passengers = Arc::new(passengers);
    let drivers = Arc::new(drivers);
    let trips = Arc::new(trips);

    let state = AppState::<InMemoryStore>::new(passengers.clone(), drivers.clone(), trips.clone());
    let server = TestServer::new(handlers::router(state)).expect("Failed to start test server");

    TestApp {
        server,
        passengers,
        drivers,
        trips,
    }
}
