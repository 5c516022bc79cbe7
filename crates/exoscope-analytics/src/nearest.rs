//! Nearest habitable candidate lookup.

use exoscope_common::units::parsecs_to_light_years;
use serde::Serialize;

use crate::join::JoinedRecord;

#[derive(Debug, Clone, Serialize)]
pub struct NearestCandidate {
    pub name: String,
    /// Distance from Earth, light-years, rounded to two decimals.
    pub distance_ly: f64,
}

/// Among habitable-flagged rows with a known Earth distance, the closest one.
/// Distance is converted from parsecs to light-years for display.
pub fn nearest_habitable(rows: &[JoinedRecord]) -> Option<NearestCandidate> {
    rows.iter()
        .filter(|r| r.is_habitable())
        .filter_map(|r| r.planet.distance_pc.map(|d| (r, d)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(row, distance_pc)| NearestCandidate {
            name: row.name().to_string(),
            distance_ly: parsecs_to_light_years(distance_pc),
        })
}
