//! Hospital Finder Library.
//! Measures, sorts and estimates travel to nearby hospitals.

#[macro_use]
extern crate log;

pub mod types {
    pub mod facility;
    pub mod location;
    pub mod traffic;
}

pub mod utils {
    pub mod haversine;
    pub mod travel_time;
}

pub mod config;
pub mod data;
pub mod error;
pub mod provider;

pub use types::{facility, location, traffic};
pub use utils::{haversine, travel_time};

pub use config::Config;
pub use error::{FinderError, Result};
pub use facility::Facility;
pub use location::Coordinate;
pub use provider::{FacilityProvider, NearbyFacilityQuery, RadiusMode, StaticFacilityProvider};
pub use traffic::{TrafficCondition, TravelEstimate};
