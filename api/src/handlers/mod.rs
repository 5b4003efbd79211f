//! HTTP handlers
//!
//! Axum request handlers for the API endpoints, and the router that wires
//! them to paths.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{AppState, Store};

pub mod drivers;
pub mod extract;
pub mod passengers;
pub mod trips;

pub use drivers::{
    create_driver, delete_driver, get_driver, get_earnings, list_driver_trips, list_drivers,
    toggle_availability, update_driver,
};
pub use passengers::{
    create_passenger, delete_passenger, get_passenger, list_passenger_trips, list_passengers,
    request_trip, update_passenger,
};
pub use trips::{complete_trip, create_trip, delete_trip, get_trip, list_trips, update_trip};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router over any repository store
pub fn router<S: Store>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        // Passengers
        .route(
            "/passengers",
            get(list_passengers::<S>).post(create_passenger::<S>),
        )
        .route(
            "/passengers/:id",
            get(get_passenger::<S>)
                .patch(update_passenger::<S>)
                .delete(delete_passenger::<S>),
        )
        .route(
            "/passengers/:id/trips",
            get(list_passenger_trips::<S>).post(request_trip::<S>),
        )
        // Drivers
        .route("/drivers", get(list_drivers::<S>).post(create_driver::<S>))
        .route(
            "/drivers/:id",
            get(get_driver::<S>)
                .patch(update_driver::<S>)
                .delete(delete_driver::<S>),
        )
        .route(
            "/drivers/:id/availability",
            post(toggle_availability::<S>),
        )
        .route("/drivers/:id/trips", get(list_driver_trips::<S>))
        .route("/drivers/:id/earnings", get(get_earnings::<S>))
        // Trips
        .route("/trips", get(list_trips::<S>).post(create_trip::<S>))
        .route(
            "/trips/:id",
            get(get_trip::<S>)
                .patch(update_trip::<S>)
                .delete(delete_trip::<S>),
        )
        .route("/trips/:id/complete", post(complete_trip::<S>))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
