//! Categorical distribution comparison: the percentage of all joined rows vs
//! the habitable-only subset falling in each category of a fixed vocabulary.
//!
//! One parameterized routine, invoked for star spectral class, star age bin,
//! and planet mass class. Percentages are computed over rows with a known
//! key, aligned onto the declared category order, zero-filled where a
//! category is absent, and rounded to two decimals.

use exoscope_common::units::round2;
use exoscope_common::{PlanetClass, SpectralClass, StarAgeBin};
use serde::Serialize;

use crate::join::{habitable_subset, JoinedRecord};

/// Two aligned percentage series over a fixed category ordering.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionTable {
    pub categories: Vec<String>,
    pub all_pct: Vec<f64>,
    pub habitable_pct: Vec<f64>,
}

/// Percentage distribution of `rows` and `habitable` over `order`.
///
/// A series with zero qualifying rows degrades to all zeros rather than
/// erroring, so a category with no habitable planets still renders.
pub fn compare_distribution<C, K>(
    rows: &[JoinedRecord],
    habitable: &[JoinedRecord],
    order: &[C],
    key: K,
) -> DistributionTable
where
    C: Copy + PartialEq + std::fmt::Display,
    K: Fn(&JoinedRecord) -> Option<C>,
{
    DistributionTable {
        categories: order.iter().map(|c| c.to_string()).collect(),
        all_pct: series_pct(rows, order, &key),
        habitable_pct: series_pct(habitable, order, &key),
    }
}

fn series_pct<C, K>(rows: &[JoinedRecord], order: &[C], key: &K) -> Vec<f64>
where
    C: Copy + PartialEq,
    K: Fn(&JoinedRecord) -> Option<C>,
{
    let keys: Vec<C> = rows.iter().filter_map(key).collect();
    if keys.is_empty() {
        return vec![0.0; order.len()];
    }

    let total = keys.len() as f64;
    order
        .iter()
        .map(|category| {
            let count = keys.iter().filter(|k| *k == category).count();
            round2(count as f64 * 100.0 / total)
        })
        .collect()
}

/// Distribution over star spectral classes O..M.
pub fn star_class_distribution(rows: &[JoinedRecord]) -> DistributionTable {
    let habitable = habitable_subset(rows);
    compare_distribution(rows, &habitable, &SpectralClass::ALL, |r| {
        r.spectral_class()
    })
}

/// Distribution over 2 Gyr star-age bins, the last absorbing all older ages.
pub fn star_age_distribution(rows: &[JoinedRecord]) -> DistributionTable {
    let habitable = habitable_subset(rows);
    compare_distribution(rows, &habitable, &StarAgeBin::ALL, |r| {
        r.star_age_gyr().and_then(StarAgeBin::from_age_gyr)
    })
}

/// Distribution over planet mass classes Miniterran..Jovian.
pub fn planet_class_distribution(rows: &[JoinedRecord]) -> DistributionTable {
    let habitable = habitable_subset(rows);
    compare_distribution(rows, &habitable, &PlanetClass::ALL, |r| r.planet_class())
}
