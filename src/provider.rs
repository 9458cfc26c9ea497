//! Hospital directory providers.
//!
//! A [`FacilityProvider`] answers "which facilities are near this point"
//! with distance-decorated copies sorted closest first. The only
//! implementation today is [`StaticFacilityProvider`], backed by records
//! held in memory. A network- or database-backed provider can implement
//! the same trait without changing callers.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::data::FACILITIES;
use crate::error::{FinderError, Result};
use crate::facility::Facility;
use crate::location::Coordinate;

/// Default search radius, five kilometers.
pub const DEFAULT_RADIUS_METERS: f64 = 5000.0;

/// Query struct for finding facilities near a location.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyFacilityQuery {
    /// Point distances are measured from.
    pub reference: Coordinate,
    /// Search radius in meters.
    pub radius_meters: f64,
}

impl NearbyFacilityQuery {
    pub fn new(reference: Coordinate, radius_meters: f64) -> Self {
        Self {
            reference,
            radius_meters,
        }
    }
}

/// How a provider treats [`NearbyFacilityQuery::radius_meters`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusMode {
    /// Only facilities within the radius are returned.
    #[default]
    Filter,
    /// The radius is accepted but every facility is returned.
    Ignore,
}

impl FromStr for RadiusMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filter" => Ok(RadiusMode::Filter),
            "ignore" => Ok(RadiusMode::Ignore),
            other => Err(format!("unknown radius mode: {}", other)),
        }
    }
}

/// A source of facility records.
pub trait FacilityProvider {
    /// Returns facilities annotated with their distance from
    /// `query.reference`, sorted ascending by that distance.
    ///
    /// `Ok` with an empty vector means nothing matched. Failures are
    /// always reported as `Err`.
    fn get_facilities(&self, query: &NearbyFacilityQuery) -> Result<Vec<Facility>>;

    /// The `n` closest facilities for `query`.
    fn nearest(&self, query: &NearbyFacilityQuery, n: usize) -> Result<Vec<Facility>> {
        let mut facilities = self.get_facilities(query)?;
        facilities.truncate(n);
        Ok(facilities)
    }

    /// Looks a facility up by id, decorated with its distance from
    /// `reference`. Unknown ids are [`FinderError::UnknownFacility`].
    fn get_facility_by_id(&self, uid: &str, reference: &Coordinate) -> Result<Facility>;
}

/// In-memory provider over a fixed set of records.
#[derive(Debug, Clone)]
pub struct StaticFacilityProvider {
    records: Vec<Facility>,
    radius_mode: RadiusMode,
}

impl StaticFacilityProvider {
    /// Provider over the bundled Sion dataset.
    pub fn new(radius_mode: RadiusMode) -> Self {
        Self::from_records(FACILITIES.clone(), radius_mode)
    }

    /// Provider over caller-supplied records. Source order is kept as the
    /// tie-break for facilities at equal distance.
    pub fn from_records(records: Vec<Facility>, radius_mode: RadiusMode) -> Self {
        debug!("provider with {} records, radius {:?}", records.len(), radius_mode);
        Self {
            records,
            radius_mode,
        }
    }

    pub fn radius_mode(&self) -> RadiusMode {
        self.radius_mode
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check_reference(reference: &Coordinate) -> Result<()> {
        if reference.is_finite() {
            Ok(())
        } else {
            Err(FinderError::InvalidCoordinate {
                latitude: reference.lat(),
                longitude: reference.lng(),
            })
        }
    }

    fn decorate(facility: &Facility, reference: &Coordinate) -> Result<(f64, Facility)> {
        let decorated = facility.with_distance_from(reference);
        match decorated.distance_km {
            Some(km) if km.is_finite() && km >= 0.0 => Ok((km, decorated)),
            _ => {
                error!("distance to {} is not a finite number", facility.uid);
                Err(FinderError::DistanceComputation {
                    uid: facility.uid.clone(),
                })
            }
        }
    }
}

impl Default for StaticFacilityProvider {
    fn default() -> Self {
        Self::new(RadiusMode::default())
    }
}

impl FacilityProvider for StaticFacilityProvider {
    fn get_facilities(&self, query: &NearbyFacilityQuery) -> Result<Vec<Facility>> {
        info!("Getting facilities near {:?}", query.reference);
        Self::check_reference(&query.reference)?;

        let radius_km = match self.radius_mode {
            RadiusMode::Filter => {
                if query.radius_meters < 0.0 || !query.radius_meters.is_finite() {
                    warn!("rejecting radius {} m", query.radius_meters);
                    return Err(FinderError::InvalidRadius(query.radius_meters));
                }
                Some(query.radius_meters / 1000.0)
            }
            RadiusMode::Ignore => None,
        };

        let mut decorated = self
            .records
            .iter()
            .map(|facility| Self::decorate(facility, &query.reference))
            .collect::<Result<Vec<(f64, Facility)>>>()?;

        if let Some(radius_km) = radius_km {
            decorated.retain(|(km, _)| *km <= radius_km);
        }

        // stable: equal distances keep source order
        decorated.sort_by_key(|(km, _)| OrderedFloat(*km));

        let facilities: Vec<Facility> = decorated.into_iter().map(|(_, f)| f).collect();
        debug!(
            "{} of {} facilities returned",
            facilities.len(),
            self.records.len()
        );
        Ok(facilities)
    }

    fn get_facility_by_id(&self, uid: &str, reference: &Coordinate) -> Result<Facility> {
        debug!("uid: {}", uid);
        Self::check_reference(reference)?;
        let facility = self
            .records
            .iter()
            .find(|facility| facility.uid == uid)
            .ok_or_else(|| FinderError::UnknownFacility(uid.to_string()))?;
        Self::decorate(facility, reference).map(|(_, decorated)| decorated)
    }
}

#[cfg(test)]
mod provider_tests {
    use super::*;
    use crate::location::SION_MUMBAI;

    fn sion_query(radius_meters: f64) -> NearbyFacilityQuery {
        NearbyFacilityQuery::new(SION_MUMBAI, radius_meters)
    }

    fn assert_sorted(facilities: &[Facility]) {
        for pair in facilities.windows(2) {
            assert!(pair[0].distance_km.unwrap() <= pair[1].distance_km.unwrap());
        }
    }

    fn record(uid: &str, latitude: f64, longitude: f64) -> Facility {
        Facility {
            uid: uid.to_string(),
            name: uid.to_string(),
            address: "".to_string(),
            location: Coordinate::new(latitude, longitude),
            phone_number: None,
            rating: None,
            emergency_services: None,
            distance_km: None,
        }
    }

    #[test]
    fn test_ignore_mode_returns_all_twelve_sorted() {
        let provider = StaticFacilityProvider::new(RadiusMode::Ignore);
        for radius in [5000.0, 1.0, 0.0, -10.0, f64::NAN] {
            let facilities = provider.get_facilities(&sion_query(radius)).unwrap();
            assert_eq!(facilities.len(), 12);
            assert_sorted(&facilities);
        }
    }

    #[test]
    fn test_closest_and_farthest_from_sion() {
        let provider = StaticFacilityProvider::new(RadiusMode::Ignore);
        let facilities = provider.get_facilities(&sion_query(5000.0)).unwrap();
        assert_eq!(facilities[0].uid, "ltmg-sion-hospital");
        assert_eq!(facilities[1].uid, "hinduja-hospital");
        assert_eq!(facilities[11].uid, "fortis-mulund");
    }

    #[test]
    fn test_filter_mode_honors_radius() {
        let provider = StaticFacilityProvider::default();
        let within_5km = provider.get_facilities(&sion_query(5000.0)).unwrap();
        assert_eq!(within_5km.len(), 8);
        assert!(within_5km.iter().all(|f| f.distance_km.unwrap() <= 5.0));
        assert_sorted(&within_5km);

        let within_20km = provider.get_facilities(&sion_query(20_000.0)).unwrap();
        assert_eq!(within_20km.len(), 12);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let provider = StaticFacilityProvider::default();
        let far_away = NearbyFacilityQuery::new(Coordinate::new(51.5074, -0.1278), 5000.0);
        assert_eq!(provider.get_facilities(&far_away), Ok(vec![]));
    }

    #[test]
    fn test_invalid_radius_is_reported() {
        let provider = StaticFacilityProvider::default();
        assert_eq!(
            provider.get_facilities(&sion_query(-1.0)),
            Err(FinderError::InvalidRadius(-1.0))
        );
        assert!(matches!(
            provider.get_facilities(&sion_query(f64::INFINITY)),
            Err(FinderError::InvalidRadius(_))
        ));
        assert!(matches!(
            provider.get_facilities(&sion_query(f64::NAN)),
            Err(FinderError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_zero_radius_keeps_facility_at_reference() {
        let provider = StaticFacilityProvider::from_records(
            vec![
                record("nearby", 19.0375196, 72.8592708),
                record("here", SION_MUMBAI.lat(), SION_MUMBAI.lng()),
            ],
            RadiusMode::Filter,
        );
        let facilities = provider.get_facilities(&sion_query(0.0)).unwrap();
        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].uid, "here");
        assert_eq!(facilities[0].distance_km, Some(0.0));

        let bundled = StaticFacilityProvider::default();
        assert_eq!(bundled.get_facilities(&sion_query(0.0)), Ok(vec![]));
    }

    #[test]
    fn test_len_and_is_empty() {
        let bundled = StaticFacilityProvider::default();
        assert_eq!(bundled.len(), 12);
        assert!(!bundled.is_empty());

        let empty = StaticFacilityProvider::from_records(vec![], RadiusMode::Filter);
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.get_facilities(&sion_query(5000.0)), Ok(vec![]));
    }

    #[test]
    fn test_invalid_reference_is_reported() {
        let provider = StaticFacilityProvider::new(RadiusMode::Ignore);
        let query = NearbyFacilityQuery::new(Coordinate::new(f64::NAN, 72.0), 5000.0);
        assert!(matches!(
            provider.get_facilities(&query),
            Err(FinderError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_bad_record_fails_the_query() {
        let provider = StaticFacilityProvider::from_records(
            vec![record("ok", 19.0, 72.8), record("broken", f64::NAN, 72.8)],
            RadiusMode::Ignore,
        );
        assert_eq!(
            provider.get_facilities(&sion_query(5000.0)),
            Err(FinderError::DistanceComputation {
                uid: "broken".to_string()
            })
        );
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let provider = StaticFacilityProvider::new(RadiusMode::Ignore);
        let query = NearbyFacilityQuery::new(Coordinate::new(19.1, 72.9), 5000.0);
        let first = provider.get_facilities(&query).unwrap();
        let second = provider.get_facilities(&query).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_result_has_non_negative_distance() {
        let provider = StaticFacilityProvider::new(RadiusMode::Ignore);
        let references = [
            SION_MUMBAI,
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(89.9, -179.9),
        ];
        for reference in references {
            let facilities = provider
                .get_facilities(&NearbyFacilityQuery::new(reference, 1.0))
                .unwrap();
            assert!(facilities
                .iter()
                .all(|f| f.distance_km.map_or(false, |km| km >= 0.0)));
            assert_sorted(&facilities);
        }
    }

    #[test]
    fn test_ties_keep_source_order() {
        let provider = StaticFacilityProvider::from_records(
            vec![
                record("far", 19.2, 72.8587793),
                record("twin-a", 19.1, 72.8587793),
                record("twin-b", 19.1, 72.8587793),
            ],
            RadiusMode::Ignore,
        );
        let uids: Vec<String> = provider
            .get_facilities(&sion_query(5000.0))
            .unwrap()
            .into_iter()
            .map(|f| f.uid)
            .collect();
        assert_eq!(uids, vec!["twin-a", "twin-b", "far"]);
    }

    #[test]
    fn test_source_records_are_not_mutated() {
        let provider = StaticFacilityProvider::new(RadiusMode::Ignore);
        provider.get_facilities(&sion_query(5000.0)).unwrap();
        assert!(FACILITIES.iter().all(|f| f.distance_km.is_none()));
        assert!(provider.records.iter().all(|f| f.distance_km.is_none()));
    }

    #[test]
    fn test_nearest() {
        let provider = StaticFacilityProvider::new(RadiusMode::Ignore);
        let nearest = provider.nearest(&sion_query(5000.0), 3).unwrap();
        let uids: Vec<&str> = nearest.iter().map(|f| f.uid.as_str()).collect();
        assert_eq!(
            uids,
            vec!["ltmg-sion-hospital", "hinduja-hospital", "shushrusha-hospital"]
        );
        assert_eq!(provider.nearest(&sion_query(5000.0), 50).unwrap().len(), 12);
    }

    #[test]
    fn test_get_facility_by_id() {
        let provider = StaticFacilityProvider::default();
        let kem = provider
            .get_facility_by_id("kem-hospital", &SION_MUMBAI)
            .unwrap();
        assert_eq!(kem.name, "KEM Hospital");
        assert!(kem.distance_km.unwrap() > 4.0);

        assert_eq!(
            provider.get_facility_by_id("missing", &SION_MUMBAI),
            Err(FinderError::UnknownFacility("missing".to_string()))
        );
    }

    #[test]
    fn test_radius_mode_from_str() {
        assert_eq!("filter".parse::<RadiusMode>(), Ok(RadiusMode::Filter));
        assert_eq!(" Ignore ".parse::<RadiusMode>(), Ok(RadiusMode::Ignore));
        assert!("sometimes".parse::<RadiusMode>().is_err());
    }
}
