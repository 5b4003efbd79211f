//! Trip aggregates
//!
//! Read-only computations over a set of trips. A driver with no rated trips
//! has no average, while a driver with no trips has earned exactly zero.

use super::entities::Trip;

/// Flat fee deducted from every trip before the driver's share is taken
pub const SERVICE_FEE: f64 = 1.65;

/// Fraction of a trip's post-fee cost paid out to the driver
pub const DRIVER_SHARE: f64 = 0.8;

/// What the driver keeps from one trip. Not floored at zero.
pub fn driver_payout(cost: f64) -> f64 {
    (cost - SERVICE_FEE) * DRIVER_SHARE
}

/// Mean of the recorded ratings, `None` when nothing was rated
pub fn average_rating(trips: &[Trip]) -> Option<f64> {
    let ratings: Vec<f64> = trips.iter().filter_map(|t| t.rating).collect();
    if ratings.is_empty() {
        return None;
    }
    Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
}

/// Net earnings across every trip, rated or not
pub fn total_earnings(trips: &[Trip]) -> f64 {
    trips.iter().map(|t| driver_payout(t.cost)).sum()
}

/// Total a passenger has been charged
pub fn total_spent(trips: &[Trip]) -> f64 {
    trips.iter().map(|t| t.cost).sum()
}
