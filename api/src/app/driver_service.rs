//! Driver service
//!
//! Handles driver registration, availability and the rating/earnings
//! aggregates derived from a driver's trips.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::earnings;
use crate::domain::entities::{Driver, DriverDraft, DriverId, DriverPatch, Trip};
use crate::domain::ports::{DriverRepository, TripRepository};
use crate::error::{DomainError, Resource};

/// A driver together with the aggregates of its trips
#[derive(Debug, Clone, Serialize)]
pub struct DriverSummary {
    pub driver: Driver,
    pub trip_count: usize,
    pub average_rating: Option<f64>,
    pub total_earnings: f64,
}

/// Service for managing drivers
pub struct DriverService<DR, TR>
where
    DR: DriverRepository,
    TR: TripRepository,
{
    drivers: Arc<DR>,
    trips: Arc<TR>,
}

impl<DR, TR> DriverService<DR, TR>
where
    DR: DriverRepository,
    TR: TripRepository,
{
    pub fn new(drivers: Arc<DR>, trips: Arc<TR>) -> Self {
        Self { drivers, trips }
    }

    /// Register a new driver. Nothing is stored when validation fails.
    pub async fn create(&self, draft: DriverDraft) -> Result<Driver, DomainError> {
        let fields = draft.into_fields().inspect_err(|errors| {
            tracing::warn!("Rejected driver: {}", errors);
        })?;

        let driver = self.drivers.create(&fields).await?;
        tracing::info!("Created driver {}", driver.id);
        Ok(driver)
    }

    /// Find a driver by ID
    pub async fn find(&self, id: &DriverId) -> Result<Driver, DomainError> {
        self.drivers.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!("Driver {} not found", id);
            DomainError::not_found(Resource::Driver, id.0)
        })
    }

    pub async fn list(&self) -> Result<Vec<Driver>, DomainError> {
        self.drivers.all().await
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.drivers.count().await
    }

    pub async fn update(&self, id: &DriverId, patch: DriverPatch) -> Result<Driver, DomainError> {
        let current = self.find(id).await?;
        let fields = current.patched(patch).into_fields().inspect_err(|errors| {
            tracing::warn!("Rejected update to driver {}: {}", id, errors);
        })?;

        let updated = self
            .drivers
            .update(id, &fields)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Driver, id.0))?;
        tracing::info!("Updated driver {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &DriverId) -> Result<(), DomainError> {
        if !self.drivers.delete(id).await? {
            tracing::debug!("Driver {} not found for delete", id);
            return Err(DomainError::not_found(Resource::Driver, id.0));
        }
        tracing::info!("Deleted driver {}", id);
        Ok(())
    }

    /// Trips driven by a driver
    pub async fn trips(&self, id: &DriverId) -> Result<Vec<Trip>, DomainError> {
        self.find(id).await?;
        self.trips.find_by_driver(id).await
    }

    /// Flip between available and unavailable. The new state is persisted
    /// before it is returned.
    pub async fn toggle_availability(&self, id: &DriverId) -> Result<Driver, DomainError> {
        let driver = self.find(id).await?;
        let toggled = self
            .drivers
            .set_available(id, !driver.available)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Driver, id.0))?;

        tracing::info!(
            "Driver {} is now {}",
            id,
            if toggled.available {
                "available"
            } else {
                "unavailable"
            }
        );
        Ok(toggled)
    }

    /// Trip count, average rating and net earnings from a single read of
    /// the driver's trips. The average is `None` when nothing was rated.
    pub async fn summary(&self, id: &DriverId) -> Result<DriverSummary, DomainError> {
        let driver = self.find(id).await?;
        let trips = self.trips.find_by_driver(id).await?;

        Ok(DriverSummary {
            trip_count: trips.len(),
            average_rating: earnings::average_rating(&trips),
            total_earnings: earnings::total_earnings(&trips),
            driver,
        })
    }
}
