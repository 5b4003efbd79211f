//! Trip handlers
//!
//! Direct trip management plus completion. Ride requests made on behalf of a
//! passenger live in the passenger handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{DriverId, PassengerId, Trip, TripDraft, TripId, TripPatch};
use crate::domain::validation::NumericInput;
use crate::error::{AppError, Resource};
use crate::handlers::extract::{parse_id, JsonInput};
use crate::{AppState, Store};

/// Request body for updating a trip.
/// `"rating": null` clears the rating; an absent key keeps it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTripRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<DriverId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_id: Option<PassengerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<NumericInput>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub rating: Option<Option<NumericInput>>,
}

impl From<UpdateTripRequest> for TripPatch {
    fn from(request: UpdateTripRequest) -> Self {
        TripPatch {
            driver_id: request.driver_id,
            passenger_id: request.passenger_id,
            date: request.date,
            cost: request.cost,
            rating: request.rating,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteTripRequest {
    pub rating: NumericInput,
}

/// GET /trips
pub async fn list_trips<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Trip>>, AppError> {
    Ok(Json(state.trip_service.list().await?))
}

/// POST /trips
pub async fn create_trip<S: Store>(
    State(state): State<AppState<S>>,
    JsonInput(request): JsonInput<TripDraft>,
) -> Result<(StatusCode, Json<Trip>), AppError> {
    let request = request?;
    let trip = state
        .trip_service
        .create_trip(request.clone())
        .await
        .map_err(|e| AppError::with_input(e, &request))?;

    Ok((StatusCode::CREATED, Json(trip)))
}

/// GET /trips/:id
pub async fn get_trip<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Trip>, AppError> {
    let id = TripId(parse_id(&id, Resource::Trip)?);
    Ok(Json(state.trip_service.find(&id).await?))
}

/// PATCH /trips/:id
pub async fn update_trip<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonInput(request): JsonInput<UpdateTripRequest>,
) -> Result<Json<Trip>, AppError> {
    let id = TripId(parse_id(&id, Resource::Trip)?);
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            state.trip_service.find(&id).await?;
            return Err(err);
        }
    };

    let trip = state
        .trip_service
        .update_trip(&id, request.clone().into())
        .await
        .map_err(|e| AppError::with_input(e, &request))?;

    Ok(Json(trip))
}

/// DELETE /trips/:id
pub async fn delete_trip<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = TripId(parse_id(&id, Resource::Trip)?);
    state.trip_service.delete_trip(&id).await?;
    Ok(Redirect::to("/trips"))
}

/// POST /trips/:id/complete
///
/// Rate the trip and make its driver available again.
pub async fn complete_trip<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonInput(request): JsonInput<CompleteTripRequest>,
) -> Result<Json<Trip>, AppError> {
    let id = TripId(parse_id(&id, Resource::Trip)?);
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            state.trip_service.find(&id).await?;
            return Err(err);
        }
    };

    let trip = state
        .trip_service
        .complete_trip(&id, request.rating.clone())
        .await
        .map_err(|e| AppError::with_input(e, &request))?;

    Ok(Json(trip))
}
