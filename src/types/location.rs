//! Struct definitions and implementations for [`Coordinate`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Coordinate`] is a geographic point in decimal degrees. It is
/// usually the position of a [`Facility`](`super::facility::Facility`)
/// or the reference point a query measures distances from.
///
/// Components are wrapped in [`OrderedFloat`] so coordinates can be
/// compared, hashed and used as map keys. Ranges are not validated;
/// latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

/// Sion, Mumbai. The fixed reference point used when none is configured.
pub static SION_MUMBAI: Coordinate = Coordinate {
    latitude: OrderedFloat(19.0374112),
    longitude: OrderedFloat(72.8587793),
};

impl Coordinate {
    /// Builds a coordinate from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    pub fn lat(&self) -> f64 {
        self.latitude.into_inner()
    }

    pub fn lng(&self) -> f64 {
        self.longitude.into_inner()
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat().is_finite() && self.lng().is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }
}
