//! Left join of the NASA archive table with the PHL habitability table on
//! planet name. Unmatched rows keep `None` for every habitability field,
//! standard relational semantics.

use exoscope_data::{ExoplanetRecord, HabitabilityRecord};
use std::collections::HashMap;
use tracing::debug;

/// One row of the combined view used by every habitable-zone chart.
#[derive(Debug, Clone)]
pub struct JoinedRecord {
    pub planet: ExoplanetRecord,
    pub habitat: Option<HabitabilityRecord>,
}

impl JoinedRecord {
    pub fn name(&self) -> &str {
        &self.planet.name
    }

    pub fn is_habitable(&self) -> bool {
        self.habitat.as_ref().is_some_and(|h| h.is_habitable())
    }

    pub fn star_temperature_k(&self) -> Option<f64> {
        self.habitat.as_ref().and_then(|h| h.star_temperature_k)
    }

    pub fn planet_distance_au(&self) -> Option<f64> {
        self.habitat.as_ref().and_then(|h| h.planet_distance_au)
    }

    pub fn star_age_gyr(&self) -> Option<f64> {
        self.habitat.as_ref().and_then(|h| h.star_age_gyr)
    }

    pub fn spectral_class(&self) -> Option<exoscope_common::SpectralClass> {
        self.habitat.as_ref().and_then(|h| h.spectral_class())
    }

    pub fn planet_class(&self) -> Option<exoscope_common::PlanetClass> {
        self.habitat.as_ref().and_then(|h| h.planet_class())
    }

    pub fn constellation(&self) -> Option<&str> {
        self.habitat
            .as_ref()
            .and_then(|h| h.constellation.as_deref())
    }
}

/// Left join on planet name, exoplanet table as the left side.
/// When the habitability export lists a name twice, the first row wins.
pub fn left_join(
    exoplanets: &[ExoplanetRecord],
    habitability: &[HabitabilityRecord],
) -> Vec<JoinedRecord> {
    let mut by_name: HashMap<&str, &HabitabilityRecord> = HashMap::new();
    for record in habitability {
        by_name.entry(record.name.as_str()).or_insert(record);
    }

    let joined: Vec<JoinedRecord> = exoplanets
        .iter()
        .map(|planet| JoinedRecord {
            planet: planet.clone(),
            habitat: by_name.get(planet.name.as_str()).map(|h| (*h).clone()),
        })
        .collect();

    debug!(
        left = exoplanets.len(),
        matched = joined.iter().filter(|r| r.habitat.is_some()).count(),
        "joined catalog tables"
    );
    joined
}

/// Rows flagged habitable (candidate tier 1 or 2) in the joined view.
pub fn habitable_subset(rows: &[JoinedRecord]) -> Vec<JoinedRecord> {
    rows.iter().filter(|r| r.is_habitable()).cloned().collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn exoplanet(name: &str, distance_pc: Option<f64>) -> ExoplanetRecord {
        ExoplanetRecord {
            name: name.to_string(),
            host_star: format!("{name} host"),
            discovery_year: Some(2016),
            discovery_method: "Radial Velocity".to_string(),
            orbital_period_days: Some(11.2),
            distance_pc,
            distance_err_pc: None,
        }
    }

    pub(crate) fn habitability(name: &str, code: i64) -> HabitabilityRecord {
        HabitabilityRecord {
            name: name.to_string(),
            habitable_code: Some(code),
            star_class: Some("M".to_string()),
            planet_type: Some("Terran".to_string()),
            star_age_gyr: Some(4.8),
            planet_distance_au: Some(0.05),
            star_temperature_k: Some(3050.0),
            constellation: Some("Centaurus".to_string()),
        }
    }

    #[test]
    fn test_left_join_keeps_unmatched_rows() {
        let left = vec![exoplanet("A", Some(1.0)), exoplanet("B", Some(2.0))];
        let right = vec![habitability("A", 1)];

        let joined = left_join(&left, &right);
        assert_eq!(joined.len(), 2);
        assert!(joined[0].habitat.is_some());
        assert!(joined[1].habitat.is_none());
        assert_eq!(joined[1].star_temperature_k(), None);
    }

    #[test]
    fn test_left_join_first_right_row_wins() {
        let left = vec![exoplanet("A", Some(1.0))];
        let mut dup = habitability("A", 0);
        dup.star_temperature_k = Some(9999.0);
        let right = vec![habitability("A", 1), dup];

        let joined = left_join(&left, &right);
        assert!(joined[0].is_habitable());
        assert_eq!(joined[0].star_temperature_k(), Some(3050.0));
    }

    #[test]
    fn test_habitable_subset_requires_candidate_tier() {
        let left = vec![
            exoplanet("A", Some(1.0)),
            exoplanet("B", Some(2.0)),
            exoplanet("C", Some(3.0)),
            exoplanet("D", Some(4.0)),
        ];
        let right = vec![
            habitability("A", 1),
            habitability("B", 2),
            habitability("C", 0),
        ];

        let joined = left_join(&left, &right);
        let habitable = habitable_subset(&joined);
        let names: Vec<&str> = habitable.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["A", "B"]);
    }
}
