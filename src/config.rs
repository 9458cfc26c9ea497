//! Runtime configuration, resolved from the environment at startup.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use std::env::VarError;
use std::str::FromStr;

use crate::error::{FinderError, Result};
use crate::location::{Coordinate, SION_MUMBAI};
use crate::provider::{
    NearbyFacilityQuery, RadiusMode, StaticFacilityProvider, DEFAULT_RADIUS_METERS,
};

pub const MAPS_API_KEY: &str = "MAPS_API_KEY";
pub const REFERENCE_LAT: &str = "FINDER_REFERENCE_LAT";
pub const REFERENCE_LNG: &str = "FINDER_REFERENCE_LNG";
pub const SEARCH_RADIUS_M: &str = "FINDER_SEARCH_RADIUS_M";
pub const RADIUS_MODE: &str = "FINDER_RADIUS_MODE";
pub const TIME_ZONE: &str = "FINDER_TIME_ZONE";

/// Every variable [`Config::env`] reads. All are optional.
pub const VARIABLES: [&str; 6] = [
    MAPS_API_KEY,
    REFERENCE_LAT,
    REFERENCE_LNG,
    SEARCH_RADIUS_M,
    RADIUS_MODE,
    TIME_ZONE,
];

pub const DEFAULT_TIME_ZONE: Tz = Tz::Asia__Kolkata;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Key for the maps service used by the presentation layer. Never
    /// compiled into the artifact.
    pub maps_api_key: Option<String>,
    pub reference: Coordinate,
    pub search_radius_meters: f64,
    pub radius_mode: RadiusMode,
    /// Zone whose wall-clock hour drives traffic estimates.
    pub time_zone: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maps_api_key: None,
            reference: SION_MUMBAI,
            search_radius_meters: DEFAULT_RADIUS_METERS,
            radius_mode: RadiusMode::default(),
            time_zone: DEFAULT_TIME_ZONE,
        }
    }
}

impl Config {
    /// Reads the process environment.
    pub fn env() -> Result<Self> {
        debug!("reading {}", VARIABLES.join(", "));
        Self::from_lookup(env)
    }

    /// Builds a config from any variable lookup. `Ok(None)` means the
    /// variable is unset and the default applies.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let defaults = Config::default();

        let maps_api_key = lookup(MAPS_API_KEY)?.filter(|key| !key.trim().is_empty());

        let latitude = parse_or(&lookup, REFERENCE_LAT, defaults.reference.lat())?;
        let longitude = parse_or(&lookup, REFERENCE_LNG, defaults.reference.lng())?;

        let search_radius_meters =
            parse_or(&lookup, SEARCH_RADIUS_M, defaults.search_radius_meters)?;
        let radius_mode = parse_or(&lookup, RADIUS_MODE, defaults.radius_mode)?;

        let time_zone = match lookup(TIME_ZONE)? {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| FinderError::UnknownTimeZone(name.clone()))?,
            None => defaults.time_zone,
        };

        Ok(Self {
            maps_api_key,
            reference: Coordinate::new(latitude, longitude),
            search_radius_meters,
            radius_mode,
            time_zone,
        })
    }

    /// The configured key, or an error naming the variable to set.
    pub fn maps_api_key(&self) -> Result<&str> {
        self.maps_api_key
            .as_deref()
            .ok_or_else(|| FinderError::MissingVariable(MAPS_API_KEY.to_string()))
    }

    /// Hour of day of `now` in the configured time zone.
    pub fn local_hour(&self, now: DateTime<Utc>) -> u32 {
        now.with_timezone(&self.time_zone).hour()
    }

    pub fn query(&self) -> NearbyFacilityQuery {
        NearbyFacilityQuery::new(self.reference, self.search_radius_meters)
    }

    pub fn provider(&self) -> StaticFacilityProvider {
        StaticFacilityProvider::new(self.radius_mode)
    }

    pub fn log(&self) {
        info!(
            "{}: {}",
            MAPS_API_KEY,
            if self.maps_api_key.is_some() { "<set>" } else { "<unset>" }
        );
        info!("reference: ({}, {})", self.reference.lat(), self.reference.lng());
        info!("search radius: {} m ({:?})", self.search_radius_meters, self.radius_mode);
        info!("time zone: {}", self.time_zone.name());
    }
}

fn env(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(FinderError::InvalidVariable {
            name: name.to_string(),
            value: "<not valid unicode>".to_string(),
        }),
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Result<Option<String>>,
    T: FromStr,
{
    match lookup(name)? {
        Some(value) => value.trim().parse::<T>().map_err(|_| FinderError::InvalidVariable {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
