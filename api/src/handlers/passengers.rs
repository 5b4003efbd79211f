//! Passenger handlers
//!
//! Endpoints for passenger management and ride requests.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::PassengerDetail;
use crate::domain::entities::{
    Passenger, PassengerDraft, PassengerId, PassengerPatch, Trip, TripDraft,
};
use crate::error::{AppError, Resource};
use crate::handlers::extract::{parse_id, JsonInput};
use crate::{AppState, Store};

/// Request body for updating a passenger.
/// An absent key leaves the attribute alone; an explicit `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePassengerRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub phone_num: Option<Option<String>>,
}

impl From<UpdatePassengerRequest> for PassengerPatch {
    fn from(request: UpdatePassengerRequest) -> Self {
        PassengerPatch {
            name: request.name,
            phone_num: request.phone_num,
        }
    }
}

/// GET /passengers
pub async fn list_passengers<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Passenger>>, AppError> {
    Ok(Json(state.passenger_service.list().await?))
}

/// POST /passengers
pub async fn create_passenger<S: Store>(
    State(state): State<AppState<S>>,
    JsonInput(request): JsonInput<PassengerDraft>,
) -> Result<(StatusCode, Json<Passenger>), AppError> {
    let request = request?;
    let passenger = state
        .passenger_service
        .create(request.clone())
        .await
        .map_err(|e| AppError::with_input(e, &request))?;

    Ok((StatusCode::CREATED, Json(passenger)))
}

/// GET /passengers/:id
///
/// The passenger with their ride history and total spend.
pub async fn get_passenger<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<PassengerDetail>, AppError> {
    let id = PassengerId(parse_id(&id, Resource::Passenger)?);
    Ok(Json(state.passenger_service.detail(&id).await?))
}

/// PATCH /passengers/:id
pub async fn update_passenger<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonInput(request): JsonInput<UpdatePassengerRequest>,
) -> Result<Json<Passenger>, AppError> {
    let id = PassengerId(parse_id(&id, Resource::Passenger)?);
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            state.passenger_service.find(&id).await?;
            return Err(err);
        }
    };

    let passenger = state
        .passenger_service
        .update(&id, request.clone().into())
        .await
        .map_err(|e| AppError::with_input(e, &request))?;

    Ok(Json(passenger))
}

/// DELETE /passengers/:id
///
/// Redirects to the passenger listing.
pub async fn delete_passenger<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = PassengerId(parse_id(&id, Resource::Passenger)?);
    state.passenger_service.delete(&id).await?;
    Ok(Redirect::to("/passengers"))
}

/// GET /passengers/:id/trips
pub async fn list_passenger_trips<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let id = PassengerId(parse_id(&id, Resource::Passenger)?);
    Ok(Json(state.passenger_service.trips(&id).await?))
}

/// POST /passengers/:id/trips
///
/// Request a ride. Without a `driver_id` the first available driver is assigned.
pub async fn request_trip<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonInput(request): JsonInput<TripDraft>,
) -> Result<(StatusCode, Json<Trip>), AppError> {
    let id = PassengerId(parse_id(&id, Resource::Passenger)?);
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            state.passenger_service.find(&id).await?;
            return Err(err);
        }
    };

    let trip = state
        .trip_service
        .request_trip(&id, request.clone())
        .await
        .map_err(|e| AppError::with_input(e, &request))?;

    Ok((StatusCode::CREATED, Json(trip)))
}
