//! Passenger service
//!
//! Handles passenger registration, profile changes and ride history.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::earnings;
use crate::domain::entities::{Passenger, PassengerDraft, PassengerId, PassengerPatch, Trip};
use crate::domain::ports::{PassengerRepository, TripRepository};
use crate::error::{DomainError, Resource};

/// A passenger together with their trips
#[derive(Debug, Clone, Serialize)]
pub struct PassengerDetail {
    #[serde(flatten)]
    pub passenger: Passenger,
    pub trips: Vec<Trip>,
    pub total_spent: f64,
}

/// Service for managing passengers
pub struct PassengerService<PR, TR>
where
    PR: PassengerRepository,
    TR: TripRepository,
{
    passengers: Arc<PR>,
    trips: Arc<TR>,
}

impl<PR, TR> PassengerService<PR, TR>
where
    PR: PassengerRepository,
    TR: TripRepository,
{
    pub fn new(passengers: Arc<PR>, trips: Arc<TR>) -> Self {
        Self { passengers, trips }
    }

    /// Register a new passenger. Nothing is stored when validation fails.
    pub async fn create(&self, draft: PassengerDraft) -> Result<Passenger, DomainError> {
        let fields = draft.into_fields().inspect_err(|errors| {
            tracing::warn!("Rejected passenger: {}", errors);
        })?;

        let passenger = self.passengers.create(&fields).await?;
        tracing::info!("Created passenger {}", passenger.id);
        Ok(passenger)
    }

    /// Find a passenger by ID
    pub async fn find(&self, id: &PassengerId) -> Result<Passenger, DomainError> {
        self.passengers.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!("Passenger {} not found", id);
            DomainError::not_found(Resource::Passenger, id.0)
        })
    }

    pub async fn list(&self) -> Result<Vec<Passenger>, DomainError> {
        self.passengers.all().await
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.passengers.count().await
    }

    /// Overwrite the supplied attributes. On validation failure the stored
    /// record is left untouched.
    pub async fn update(
        &self,
        id: &PassengerId,
        patch: PassengerPatch,
    ) -> Result<Passenger, DomainError> {
        let current = self.find(id).await?;
        let fields = current.patched(patch).into_fields().inspect_err(|errors| {
            tracing::warn!("Rejected update to passenger {}: {}", id, errors);
        })?;

        let updated = self
            .passengers
            .update(id, &fields)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Passenger, id.0))?;
        tracing::info!("Updated passenger {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &PassengerId) -> Result<(), DomainError> {
        if !self.passengers.delete(id).await? {
            tracing::debug!("Passenger {} not found for delete", id);
            return Err(DomainError::not_found(Resource::Passenger, id.0));
        }
        tracing::info!("Deleted passenger {}", id);
        Ok(())
    }

    /// Ride history for a passenger
    pub async fn trips(&self, id: &PassengerId) -> Result<Vec<Trip>, DomainError> {
        self.find(id).await?;
        self.trips.find_by_passenger(id).await
    }

    /// The passenger with their ride history and what they have spent
    pub async fn detail(&self, id: &PassengerId) -> Result<PassengerDetail, DomainError> {
        let passenger = self.find(id).await?;
        let trips = self.trips.find_by_passenger(id).await?;

        Ok(PassengerDetail {
            total_spent: earnings::total_spent(&trips),
            passenger,
            trips,
        })
    }
}
