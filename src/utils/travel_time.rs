//! Heuristic drive-time estimation for urban trips.

use chrono::{DateTime, TimeZone, Timelike};

use crate::traffic::{TrafficCondition, TravelEstimate};

/// Free-flow urban pace, about 24 km/h.
pub const MINUTES_PER_KM: f64 = 2.5;

/// Estimates the drive time for `distance_km` at the given local hour.
///
/// The hour is passed in by the caller; nothing here reads the clock.
/// Non-positive or non-finite distances estimate to zero minutes.
///
/// # Arguments
/// * `distance_km` - Distance to travel in kilometers.
/// * `hour_of_day` - Local wall-clock hour, `0..=23`.
pub fn estimate_travel_time(distance_km: f64, hour_of_day: u32) -> TravelEstimate {
    let traffic_condition = TrafficCondition::for_hour(hour_of_day);
    let raw = (distance_km * MINUTES_PER_KM * traffic_condition.multiplier()).round();
    let minutes = if raw.is_finite() && raw > 0.0 {
        raw.min(u32::MAX as f64) as u32
    } else {
        0
    };
    debug!(
        "{:.3} km at hour {} -> {} min ({})",
        distance_km, hour_of_day, minutes, traffic_condition
    );
    TravelEstimate {
        minutes,
        traffic_condition,
    }
}

/// Same as [`estimate_travel_time`], taking the hour from `at` in its own
/// time zone.
pub fn estimate_travel_time_at<Tz: TimeZone>(
    distance_km: f64,
    at: &DateTime<Tz>,
) -> TravelEstimate {
    estimate_travel_time(distance_km, at.hour())
}
