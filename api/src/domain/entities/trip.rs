//! Trip domain entity
//!
//! A single ride linking one driver and one passenger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::driver::DriverId;
use super::passenger::PassengerId;
use crate::domain::validation::{
    optional_number, parse_date, require_amount, NumericInput, Validate, ValidationErrors,
    INVALID_DATE, MUST_EXIST, NEGATIVE, NOT_A_NUMBER,
};

/// Unique identifier for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TripId(pub i64);

impl From<i64> for TripId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub id: TripId,
    pub driver_id: DriverId,
    pub passenger_id: PassengerId,
    pub date: NaiveDate,
    /// Absent while the trip is in progress or was never rated
    pub rating: Option<f64>,
    pub cost: f64,
}

impl Trip {
    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }

    /// Apply a patch on top of the stored values. The result is unvalidated.
    pub fn patched(&self, patch: TripPatch) -> TripDraft {
        TripDraft {
            driver_id: Some(patch.driver_id.unwrap_or(self.driver_id)),
            passenger_id: Some(patch.passenger_id.unwrap_or(self.passenger_id)),
            date: Some(patch.date.unwrap_or_else(|| self.date.to_string())),
            cost: Some(patch.cost.unwrap_or(NumericInput::Number(self.cost))),
            rating: patch
                .rating
                .unwrap_or_else(|| self.rating.map(NumericInput::Number)),
        }
    }
}

impl Validate for Trip {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !self.cost.is_finite() {
            errors.add("cost", NOT_A_NUMBER);
        } else if self.cost < 0.0 {
            errors.add("cost", NEGATIVE);
        }
        if matches!(self.rating, Some(r) if !r.is_finite()) {
            errors.add("rating", NOT_A_NUMBER);
        }
        errors.into_result()
    }
}

/// Unvalidated trip input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    pub driver_id: Option<DriverId>,
    pub passenger_id: Option<PassengerId>,
    /// Calendar date in any accepted textual format
    pub date: Option<String>,
    pub cost: Option<NumericInput>,
    pub rating: Option<NumericInput>,
}

impl TripDraft {
    /// Check every field and produce the values to persist.
    /// A missing date falls back to `today`.
    pub fn into_fields(self, today: NaiveDate) -> Result<TripFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.driver_id.is_none() {
            errors.add("driver", MUST_EXIST);
        }
        if self.passenger_id.is_none() {
            errors.add("passenger", MUST_EXIST);
        }

        let date = match self.date.as_deref() {
            None => Some(today),
            Some(text) => {
                let parsed = parse_date(text);
                if parsed.is_none() {
                    errors.add("date", INVALID_DATE);
                }
                parsed
            }
        };

        let cost = require_amount(&mut errors, "cost", self.cost.as_ref());
        let rating = optional_number(&mut errors, "rating", self.rating.as_ref());

        match (self.driver_id, self.passenger_id, date, cost, rating) {
            (Some(driver_id), Some(passenger_id), Some(date), Some(cost), Ok(rating))
                if errors.is_empty() =>
            {
                Ok(TripFields {
                    driver_id,
                    passenger_id,
                    date,
                    rating,
                    cost,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Validated trip attributes, ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct TripFields {
    pub driver_id: DriverId,
    pub passenger_id: PassengerId,
    pub date: NaiveDate,
    pub rating: Option<f64>,
    pub cost: f64,
}

/// Partial update. `None` leaves an attribute unchanged;
/// `rating: Some(None)` returns the trip to unrated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPatch {
    pub driver_id: Option<DriverId>,
    pub passenger_id: Option<PassengerId>,
    pub date: Option<String>,
    pub cost: Option<NumericInput>,
    pub rating: Option<Option<NumericInput>>,
}
