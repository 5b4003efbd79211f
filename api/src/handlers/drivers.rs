//! Driver handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::DriverSummary;
use crate::domain::entities::{Driver, DriverDraft, DriverId, DriverPatch, Trip};
use crate::error::{AppError, Resource};
use crate::handlers::extract::{parse_id, JsonInput};
use crate::{AppState, Store};

/// Request body for updating a driver.
/// An explicit `null` name or vin is rejected as blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDriverRequest {
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
    pub vin: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl From<UpdateDriverRequest> for DriverPatch {
    fn from(request: UpdateDriverRequest) -> Self {
        DriverPatch {
            name: request.name,
            vin: request.vin,
            available: request.available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EarningsResponse {
    pub average_rating: Option<f64>,
    pub total_earnings: f64,
}

/// GET /drivers
pub async fn list_drivers<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Driver>>, AppError> {
    Ok(Json(state.driver_service.list().await?))
}

/// POST /drivers
pub async fn create_driver<S: Store>(
    State(state): State<AppState<S>>,
    JsonInput(request): JsonInput<DriverDraft>,
) -> Result<(StatusCode, Json<Driver>), AppError> {
    let request = request?;
    let driver = state
        .driver_service
        .create(request.clone())
        .await
        .map_err(|e| AppError::with_input(e, &request))?;

    Ok((StatusCode::CREATED, Json(driver)))
}

/// GET /drivers/:id
///
/// The driver with trip count, average rating and earnings.
pub async fn get_driver<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<DriverSummary>, AppError> {
    let id = DriverId(parse_id(&id, Resource::Driver)?);
    Ok(Json(state.driver_service.summary(&id).await?))
}

/// PATCH /drivers/:id
pub async fn update_driver<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonInput(request): JsonInput<UpdateDriverRequest>,
) -> Result<Json<Driver>, AppError> {
    let id = DriverId(parse_id(&id, Resource::Driver)?);
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            state.driver_service.find(&id).await?;
            return Err(err);
        }
    };

    let driver = state
        .driver_service
        .update(&id, request.clone().into())
        .await
        .map_err(|e| AppError::with_input(e, &request))?;

    Ok(Json(driver))
}

/// DELETE /drivers/:id
pub async fn delete_driver<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = DriverId(parse_id(&id, Resource::Driver)?);
    state.driver_service.delete(&id).await?;
    Ok(Redirect::to("/drivers"))
}

/// POST /drivers/:id/availability
pub async fn toggle_availability<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Driver>, AppError> {
    let id = DriverId(parse_id(&id, Resource::Driver)?);
    Ok(Json(state.driver_service.toggle_availability(&id).await?))
}

/// GET /drivers/:id/trips
pub async fn list_driver_trips<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let id = DriverId(parse_id(&id, Resource::Driver)?);
    Ok(Json(state.driver_service.trips(&id).await?))
}

/// GET /drivers/:id/earnings
pub async fn get_earnings<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<EarningsResponse>, AppError> {
    let id = DriverId(parse_id(&id, Resource::Driver)?);
    let summary = state.driver_service.summary(&id).await?;
    Ok(Json(EarningsResponse {
        average_rating: summary.average_rating,
        total_earnings: summary.total_earnings,
    }))
}
