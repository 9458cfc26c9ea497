//! Bundled hospital records for the Sion area of Mumbai.
//!
//! Stands in for a live directory service until one exists.

use once_cell::sync::Lazy;

use crate::facility::Facility;
use crate::location::Coordinate;

/// Verified hospitals near Sion, in source order.
pub static FACILITIES: Lazy<Vec<Facility>> = Lazy::new(|| {
    vec![
        Facility {
            uid: "ltmg-sion-hospital".to_string(),
            name: "Lokmanya Tilak Municipal General Hospital".to_string(),
            address: "Dr. Babasaheb Ambedkar Road, Sion West, Mumbai 400022".to_string(),
            location: Coordinate::new(19.0375196, 72.8592708),
            phone_number: Some("+91 22 2407 6381".to_string()),
            rating: Some(4.1),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "kem-hospital".to_string(),
            name: "KEM Hospital".to_string(),
            address: "Acharya Donde Marg, Parel, Mumbai 400012".to_string(),
            location: Coordinate::new(19.0014528, 72.8414057),
            phone_number: Some("+91 22 2410 7000".to_string()),
            rating: Some(4.0),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "global-hospital".to_string(),
            name: "Global Hospital".to_string(),
            address: "35, Dr. E. Borges Road, Hospital Avenue, Parel, Mumbai 400012".to_string(),
            location: Coordinate::new(19.0027, 72.838),
            phone_number: Some("+91 22 6767 6767".to_string()),
            rating: Some(4.3),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "hinduja-hospital".to_string(),
            name: "P. D. Hinduja Hospital".to_string(),
            address: "Veer Savarkar Marg, Mahim West, Mumbai 400016".to_string(),
            location: Coordinate::new(19.0371619, 72.8393064),
            phone_number: Some("+91 22 6668 8888".to_string()),
            rating: Some(4.5),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "lilavati-hospital".to_string(),
            name: "Lilavati Hospital".to_string(),
            address: "A-791, Bandra Reclamation, Bandra West, Mumbai 400050".to_string(),
            location: Coordinate::new(19.0511566, 72.8288842),
            phone_number: Some("+91 22 2675 1000".to_string()),
            rating: Some(4.4),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "kohinoor-hospital".to_string(),
            name: "Kohinoor Hospital".to_string(),
            address: "Kirol Road, Off LBS Road, Kurla West, Mumbai 400070".to_string(),
            location: Coordinate::new(19.0731113, 72.8810882),
            phone_number: Some("+91 22 6766 6666".to_string()),
            rating: Some(4.2),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "shushrusha-hospital".to_string(),
            name: "Shushrusha Hospital".to_string(),
            address: "Ranade Road, Dadar West, Mumbai 400028".to_string(),
            location: Coordinate::new(19.0188, 72.8385),
            phone_number: Some("+91 22 2422 4421".to_string()),
            rating: Some(4.0),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "holy-family-hospital".to_string(),
            name: "Holy Family Hospital".to_string(),
            address: "St. Andrew Road, Bandra West, Mumbai 400050".to_string(),
            location: Coordinate::new(19.0583651, 72.8283923),
            phone_number: Some("+91 22 2642 2111".to_string()),
            rating: Some(4.2),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "wockhardt-hospital".to_string(),
            name: "Wockhardt Hospital".to_string(),
            address: "Dr. Anandrao Nair Road, Mumbai Central, Mumbai 400011".to_string(),
            location: Coordinate::new(18.9745585, 72.8245696),
            phone_number: Some("+91 22 6178 2000".to_string()),
            rating: Some(4.2),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "bhatia-hospital".to_string(),
            name: "Bhatia Hospital".to_string(),
            address: "Tardeo Road, Tardeo, Mumbai 400007".to_string(),
            location: Coordinate::new(18.9681, 72.8209),
            phone_number: Some("+91 22 6777 7000".to_string()),
            rating: Some(4.1),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "fortis-mulund".to_string(),
            name: "Fortis Hospital Mulund".to_string(),
            address: "Mulund Goregaon Link Road, Mulund West, Mumbai 400078".to_string(),
            location: Coordinate::new(19.1782, 72.9537),
            phone_number: Some("+91 22 7196 3000".to_string()),
            rating: Some(4.4),
            emergency_services: Some(true),
            distance_km: None,
        },
        Facility {
            uid: "sevenhills-hospital".to_string(),
            name: "SevenHills Hospital".to_string(),
            address: "Marol Maroshi Road, Andheri East, Mumbai 400059".to_string(),
            location: Coordinate::new(19.1238, 72.8726),
            phone_number: Some("+91 22 6735 0000".to_string()),
            rating: Some(4.3),
            emergency_services: Some(true),
            distance_km: None,
        },
    ]
});
