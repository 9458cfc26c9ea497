//! Module for errors.

use thiserror::Error;

/// Error from the hospital finder interface.
#[derive(Debug, Error, PartialEq)]
pub enum FinderError {
    /// The reference coordinate has a NaN or infinite component.
    #[error("invalid reference coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// The search radius cannot be used as a filter.
    #[error("invalid search radius: {0} m")]
    InvalidRadius(f64),

    /// Building the decorated facility list failed.
    #[error("could not compute distance to facility {uid}")]
    DistanceComputation { uid: String },

    #[error("facility not found by id: {0}")]
    UnknownFacility(String),

    // Configuration
    #[error("{0} not set")]
    MissingVariable(String),

    #[error("{name} has invalid value {value:?}")]
    InvalidVariable { name: String, value: String },

    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
