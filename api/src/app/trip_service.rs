//! Trip service
//!
//! Owns the trip lifecycle: creation (directly or as a passenger's ride
//! request), updates, completion and deletion. Every write checks that the
//! referenced driver and passenger exist before anything is stored.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{
    DriverId, PassengerId, Trip, TripDraft, TripFields, TripId, TripPatch,
};
use crate::domain::ports::{DriverRepository, PassengerRepository, TripRepository};
use crate::domain::validation::{
    NumericInput, ValidationErrors, BLANK, MUST_EXIST, NO_AVAILABLE_DRIVERS,
};
use crate::error::{DomainError, Resource};

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Service for managing trips
pub struct TripService<PR, DR, TR>
where
    PR: PassengerRepository,
    DR: DriverRepository,
    TR: TripRepository,
{
    passengers: Arc<PR>,
    drivers: Arc<DR>,
    trips: Arc<TR>,
    today: fn() -> NaiveDate,
}

impl<PR, DR, TR> TripService<PR, DR, TR>
where
    PR: PassengerRepository,
    DR: DriverRepository,
    TR: TripRepository,
{
    pub fn new(passengers: Arc<PR>, drivers: Arc<DR>, trips: Arc<TR>) -> Self {
        Self {
            passengers,
            drivers,
            trips,
            today: utc_today,
        }
    }

    /// Replace the clock used to date trips that arrive without a date
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Create a trip from a draft naming both driver and passenger
    pub async fn create_trip(&self, draft: TripDraft) -> Result<Trip, DomainError> {
        let fields = self.validate(draft).await?;

        let trip = self.trips.create(&fields).await?;
        tracing::info!(
            "Created trip {} (driver {}, passenger {})",
            trip.id,
            trip.driver_id,
            trip.passenger_id
        );
        Ok(trip)
    }

    /// A passenger asks for a ride.
    ///
    /// Uses the driver named in the draft if there is one; otherwise the
    /// first available driver is assigned and taken off the road until the
    /// trip is completed.
    pub async fn request_trip(
        &self,
        passenger_id: &PassengerId,
        mut draft: TripDraft,
    ) -> Result<Trip, DomainError> {
        if self.passengers.find_by_id(passenger_id).await?.is_none() {
            tracing::debug!("Passenger {} not found for trip request", passenger_id);
            return Err(DomainError::not_found(Resource::Passenger, passenger_id.0));
        }
        draft.passenger_id = Some(*passenger_id);

        let assigned = match draft.driver_id {
            Some(_) => None,
            None => match self.drivers.find_first_available().await? {
                Some(driver) => {
                    draft.driver_id = Some(driver.id);
                    Some(driver.id)
                }
                None => {
                    tracing::warn!("No available drivers for passenger {}", passenger_id);
                    return Err(self.unassignable(draft).await);
                }
            },
        };

        let trip = self.create_trip(draft).await?;

        if let Some(driver_id) = assigned {
            self.drivers.set_available(&driver_id, false).await?;
            tracing::info!("Driver {} assigned to trip {}", driver_id, trip.id);
        }
        Ok(trip)
    }

    /// Find a trip by ID
    pub async fn find(&self, id: &TripId) -> Result<Trip, DomainError> {
        self.trips.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!("Trip {} not found", id);
            DomainError::not_found(Resource::Trip, id.0)
        })
    }

    pub async fn list(&self) -> Result<Vec<Trip>, DomainError> {
        self.trips.all().await
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.trips.count().await
    }

    /// Overwrite the supplied attributes of an existing trip
    pub async fn update_trip(&self, id: &TripId, patch: TripPatch) -> Result<Trip, DomainError> {
        let current = self.find(id).await?;
        let fields = self.validate(current.patched(patch)).await?;

        let updated = self
            .trips
            .update(id, &fields)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Trip, id.0))?;
        tracing::info!("Updated trip {}", id);
        Ok(updated)
    }

    /// Record the passenger's rating and put the driver back on the road
    pub async fn complete_trip(
        &self,
        id: &TripId,
        rating: NumericInput,
    ) -> Result<Trip, DomainError> {
        if rating.is_blank() {
            return Err(ValidationErrors::single("rating", BLANK).into());
        }

        let trip = self
            .update_trip(
                id,
                TripPatch {
                    rating: Some(Some(rating)),
                    ..Default::default()
                },
            )
            .await?;

        self.release_driver(&trip.driver_id).await?;
        tracing::info!("Completed trip {}", id);
        Ok(trip)
    }

    pub async fn delete_trip(&self, id: &TripId) -> Result<(), DomainError> {
        if !self.trips.delete(id).await? {
            tracing::debug!("Trip {} not found for delete", id);
            return Err(DomainError::not_found(Resource::Trip, id.0));
        }
        tracing::info!("Deleted trip {}", id);
        Ok(())
    }

    /// Without a driver the request fails, but the rest of the draft is
    /// still checked so every problem is reported at once.
    async fn unassignable(&self, draft: TripDraft) -> DomainError {
        let mut errors = ValidationErrors::single("driver", NO_AVAILABLE_DRIVERS);
        match self.validate(draft).await {
            Ok(_) => {}
            Err(DomainError::Validation(field_errors)) => {
                errors.merge(field_errors.without("driver"));
            }
            Err(other) => return other,
        }
        DomainError::Validation(errors)
    }

    async fn release_driver(&self, driver_id: &DriverId) -> Result<(), DomainError> {
        if let Some(driver) = self.drivers.find_by_id(driver_id).await? {
            if !driver.available {
                self.drivers.set_available(driver_id, true).await?;
            }
        }
        Ok(())
    }

    /// Field checks plus the existence of the referenced driver and
    /// passenger, reported together
    async fn validate(&self, draft: TripDraft) -> Result<TripFields, DomainError> {
        let mut errors = ValidationErrors::new();

        if let Some(driver_id) = &draft.driver_id {
            if self.drivers.find_by_id(driver_id).await?.is_none() {
                errors.add("driver", MUST_EXIST);
            }
        }
        if let Some(passenger_id) = &draft.passenger_id {
            if self.passengers.find_by_id(passenger_id).await?.is_none() {
                errors.add("passenger", MUST_EXIST);
            }
        }

        let result = match draft.into_fields((self.today)()) {
            Ok(fields) if errors.is_empty() => Ok(fields),
            Ok(_) => Err(errors),
            Err(field_errors) => {
                errors.merge(field_errors);
                Err(errors)
            }
        };

        result.map_err(|errors| {
            tracing::warn!("Rejected trip: {}", errors);
            DomainError::Validation(errors)
        })
    }
}
