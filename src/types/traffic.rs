//! Definition for the [`TrafficCondition`] type and the travel
//! estimate built from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative road traffic level, derived from the hour of day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficCondition {
    Light,
    Moderate,
    Heavy,
}

impl TrafficCondition {
    /// Classifies a local wall-clock hour.
    ///
    /// * 8-10 and 17-19 inclusive are rush hours ([`Heavy`](Self::Heavy)).
    /// * 11-16 and 20-21 are daytime and evening ([`Moderate`](Self::Moderate)).
    /// * Every other hour, including values past 23, is [`Light`](Self::Light).
    pub fn for_hour(hour_of_day: u32) -> Self {
        match hour_of_day {
            8..=10 | 17..=19 => TrafficCondition::Heavy,
            11..=16 | 20..=21 => TrafficCondition::Moderate,
            _ => TrafficCondition::Light,
        }
    }

    /// Factor applied to the free-flow travel time.
    pub fn multiplier(&self) -> f64 {
        match self {
            TrafficCondition::Light => 0.9,
            TrafficCondition::Moderate => 1.2,
            TrafficCondition::Heavy => 1.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficCondition::Light => "light",
            TrafficCondition::Moderate => "moderate",
            TrafficCondition::Heavy => "heavy",
        }
    }
}

impl fmt::Display for TrafficCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated drive to a facility.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelEstimate {
    /// Whole minutes, never negative.
    pub minutes: u32,
    pub traffic_condition: TrafficCondition,
}
