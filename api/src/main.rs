//! Rideshare API Server
//!
//! Passengers request trips, drivers fulfil them, and each trip records a
//! cost and an optional rating. Uses hexagonal (ports & adapters)
//! architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

use adapters::{
    create_schema, PostgresDriverRepository, PostgresPassengerRepository, PostgresTripRepository,
};
use app::{DriverService, PassengerService, TripService};
use config::Config;
use domain::ports::{DriverRepository, PassengerRepository, TripRepository};

/// The set of repository adapters a deployment runs with
pub trait Store: Send + Sync + 'static {
    type Passengers: PassengerRepository + 'static;
    type Drivers: DriverRepository + 'static;
    type Trips: TripRepository + 'static;
}

/// Production store backed by PostgreSQL
pub struct PostgresStore;

impl Store for PostgresStore {
    type Passengers = PostgresPassengerRepository;
    type Drivers = PostgresDriverRepository;
    type Trips = PostgresTripRepository;
}

/// Application state shared across all handlers
pub struct AppState<S: Store> {
    pub passenger_service: Arc<PassengerService<S::Passengers, S::Trips>>,
    pub driver_service: Arc<DriverService<S::Drivers, S::Trips>>,
    pub trip_service: Arc<TripService<S::Passengers, S::Drivers, S::Trips>>,
}

impl<S: Store> AppState<S> {
    pub fn new(
        passengers: Arc<S::Passengers>,
        drivers: Arc<S::Drivers>,
        trips: Arc<S::Trips>,
    ) -> Self {
        Self {
            passenger_service: Arc::new(PassengerService::new(passengers.clone(), trips.clone())),
            driver_service: Arc::new(DriverService::new(drivers.clone(), trips.clone())),
            trip_service: Arc::new(TripService::new(passengers, drivers, trips)),
        }
    }
}

impl<S: Store> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            passenger_service: self.passenger_service.clone(),
            driver_service: self.driver_service.clone(),
            trip_service: self.trip_service.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rideshare_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting rideshare API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.auto_migrate {
        create_schema(&db).await.context("Failed to create schema")?;
    }

    // Create adapters
    let passenger_repo = Arc::new(PostgresPassengerRepository::new(db.clone()));
    let driver_repo = Arc::new(PostgresDriverRepository::new(db.clone()));
    let trip_repo = Arc::new(PostgresTripRepository::new(db.clone()));

    let state = AppState::<PostgresStore>::new(passenger_repo, driver_repo, trip_repo);
    let app = handlers::router(state);

    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
