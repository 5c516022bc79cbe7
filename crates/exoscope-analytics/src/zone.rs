//! Habitable-zone filter over the joined view.
//!
//! Retains rows whose star temperature sits inside the configured
//! main-sequence band and whose planet-to-star distance is under the
//! configured cutoff, then labels each survivor from its habitability flag.
//! Rows missing either measurement fail the inequalities and drop out, so
//! the filter is idempotent.

use exoscope_config::HabitableZoneConfig;
use serde::Serialize;

use crate::join::JoinedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZoneLabel {
    Habitable,
    NonHabitable,
}

impl ZoneLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneLabel::Habitable => "Habitable",
            ZoneLabel::NonHabitable => "Non Habitable",
        }
    }
}

/// One plotted point of the habitable-zone scatter.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneRow {
    pub name: String,
    pub planet_distance_au: f64,
    pub star_temperature_k: f64,
    pub label: ZoneLabel,
}

/// Apply the zone filter and label each retained row.
pub fn zone_rows(rows: &[JoinedRecord], zone: &HabitableZoneConfig) -> Vec<ZoneRow> {
    rows.iter()
        .filter_map(|row| {
            let temperature = row.star_temperature_k()?;
            let distance = row.planet_distance_au()?;
            if temperature <= zone.min_star_temperature_k
                || temperature >= zone.max_star_temperature_k
                || distance >= zone.max_planet_distance_au
            {
                return None;
            }
            let label = if row.is_habitable() {
                ZoneLabel::Habitable
            } else {
                ZoneLabel::NonHabitable
            };
            Some(ZoneRow {
                name: row.name().to_string(),
                planet_distance_au: distance,
                star_temperature_k: temperature,
                label,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::tests::{exoplanet, habitability};
    use crate::join::left_join;

    fn joined_with(temp: Option<f64>, dist: Option<f64>, code: i64, name: &str) -> JoinedRecord {
        let mut hab = habitability(name, code);
        hab.star_temperature_k = temp;
        hab.planet_distance_au = dist;
        let rows = left_join(&[exoplanet(name, Some(1.0))], &[hab]);
        rows.into_iter().next().unwrap()
    }

    #[test]
    fn test_zone_bounds_are_exclusive() {
        let zone = HabitableZoneConfig::default();
        let rows = vec![
            joined_with(Some(3050.0), Some(0.05), 1, "inside"),
            joined_with(Some(2500.0), Some(0.05), 1, "at-lower-temp"),
            joined_with(Some(8000.0), Some(0.05), 1, "at-upper-temp"),
            joined_with(Some(5000.0), Some(2.0), 1, "at-distance-cutoff"),
            joined_with(Some(9000.0), Some(0.05), 1, "too-hot"),
        ];

        let filtered = zone_rows(&rows, &zone);
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["inside"]);
    }

    #[test]
    fn test_missing_measurements_are_excluded() {
        let zone = HabitableZoneConfig::default();
        let rows = vec![
            joined_with(None, Some(0.05), 1, "no-temp"),
            joined_with(Some(3050.0), None, 1, "no-dist"),
            joined_with(Some(3050.0), Some(0.05), 0, "full"),
        ];

        let filtered = zone_rows(&rows, &zone);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "full");
        assert_eq!(filtered[0].label, ZoneLabel::NonHabitable);
    }

    #[test]
    fn test_flag_tiers_label_habitable() {
        let zone = HabitableZoneConfig::default();
        let rows = vec![
            joined_with(Some(3050.0), Some(0.05), 1, "tier-1"),
            joined_with(Some(3050.0), Some(0.05), 2, "tier-2"),
            joined_with(Some(3050.0), Some(0.05), 0, "flat"),
        ];

        let filtered = zone_rows(&rows, &zone);
        assert_eq!(filtered[0].label, ZoneLabel::Habitable);
        assert_eq!(filtered[1].label, ZoneLabel::Habitable);
        assert_eq!(filtered[2].label, ZoneLabel::NonHabitable);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let zone = HabitableZoneConfig::default();
        let rows = vec![
            joined_with(Some(3050.0), Some(0.05), 1, "a"),
            joined_with(Some(5800.0), Some(1.0), 0, "b"),
            joined_with(Some(9000.0), Some(0.05), 1, "hot"),
            joined_with(None, Some(0.05), 1, "blank"),
        ];

        let once = zone_rows(&rows, &zone);

        // survivors re-filtered through the same bounds are unchanged
        let survivors: Vec<JoinedRecord> = rows
            .iter()
            .filter(|r| once.iter().any(|z| z.name == r.name()))
            .cloned()
            .collect();
        let twice = zone_rows(&survivors, &zone);

        let first: Vec<&str> = once.iter().map(|r| r.name.as_str()).collect();
        let second: Vec<&str> = twice.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(first, second);
    }
}
