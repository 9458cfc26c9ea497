//! Struct definitions and implementations for [`Facility`], the
//! record describing one hospital.
//!
//! Raw records carry no distance. A provider produces decorated copies
//! through [`Facility::with_distance_from`] for every query, so the
//! distance always refers to the reference point of that query and is
//! never stored with the source data.

use serde::{Deserialize, Serialize};

use crate::haversine;
use crate::location::Coordinate;

/// A hospital with its location and contact metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Stable, unique id such as `kem-hospital`.
    pub uid: String,

    /// Display name.
    pub name: String,

    /// Free-text postal address.
    pub address: String,

    /// Denotes the geographical position of the facility.
    ///
    /// See also [`Coordinate`].
    pub location: Coordinate,

    pub phone_number: Option<String>,

    /// Rating as supplied by the data source. The scale is open-ended.
    pub rating: Option<f64>,

    pub emergency_services: Option<bool>,

    /// Great-circle distance in kilometers from the reference point of
    /// the query that produced this copy. [`None`] on raw records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl Facility {
    /// Returns a copy of this record annotated with its distance from
    /// `reference`. `self` is left untouched.
    pub fn with_distance_from(&self, reference: &Coordinate) -> Facility {
        Facility {
            distance_km: Some(haversine::distance(reference, &self.location)),
            ..self.clone()
        }
    }

    /// A missing flag reads as "no emergency services".
    pub fn has_emergency_services(&self) -> bool {
        self.emergency_services.unwrap_or(false)
    }
}

#[cfg(test)]
mod facility_tests {
    use super::*;
    use crate::location::SION_MUMBAI;

    fn ltmg() -> Facility {
        Facility {
            uid: "ltmg-sion-hospital".to_string(),
            name: "Lokmanya Tilak Municipal General Hospital".to_string(),
            address: "Dr. Babasaheb Ambedkar Road, Sion West, Mumbai 400022".to_string(),
            location: Coordinate::new(19.0375196, 72.8592708),
            phone_number: Some("+91 22 2407 6381".to_string()),
            rating: Some(4.1),
            emergency_services: Some(true),
            distance_km: None,
        }
    }

    #[test]
    fn test_decorated_copy_leaves_source_untouched() {
        let raw = ltmg();
        let decorated = raw.with_distance_from(&SION_MUMBAI);

        assert_eq!(raw.distance_km, None);
        let km = decorated.distance_km.unwrap();
        assert!(km >= 0.0);
        assert!((km - 0.054).abs() <= 0.01);
        assert_eq!(decorated.uid, raw.uid);
        assert_eq!(decorated.location, raw.location);
    }

    #[test]
    fn test_distance_reflects_latest_reference() {
        let raw = ltmg();
        let near = raw.with_distance_from(&SION_MUMBAI);
        let far = near.with_distance_from(&Coordinate::new(19.1782, 72.9537));
        assert!(far.distance_km.unwrap() > near.distance_km.unwrap());
        assert_eq!(raw.with_distance_from(&raw.location).distance_km, Some(0.0));
    }

    #[test]
    fn test_emergency_flag_defaults_to_false() {
        let mut facility = ltmg();
        assert!(facility.has_emergency_services());
        facility.emergency_services = None;
        assert!(!facility.has_emergency_services());
    }
}
