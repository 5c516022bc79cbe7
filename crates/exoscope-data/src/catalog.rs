//! Typed rows for the two catalog exports and their CSV decoders.
//!
//! Column names follow the upstream exports:
//! - NASA Exoplanet Archive planetary systems table (`pl_name`, `hostname`, ...)
//! - PHL habitable exoplanets catalog (`P_NAME`, `S_TYPE_TEMP`, ...)
//!
//! Both exports carry far more columns than we read; the decoder ignores the
//! rest. Empty numeric cells decode to `None` and are excluded downstream by
//! the filters that need them.

use exoscope_common::{HabitabilityFlag, PlanetClass, Result, SpectralClass};
use serde::Deserialize;

/// One confirmed exoplanet from the NASA archive export.
#[derive(Debug, Clone, Deserialize)]
pub struct ExoplanetRecord {
    #[serde(rename = "pl_name")]
    pub name: String,
    #[serde(rename = "hostname")]
    pub host_star: String,
    #[serde(rename = "disc_year")]
    pub discovery_year: Option<i32>,
    #[serde(rename = "discoverymethod")]
    pub discovery_method: String,
    /// Orbital period around the host star, days.
    #[serde(rename = "pl_orbper")]
    pub orbital_period_days: Option<f64>,
    /// Distance to the system from Earth, parsecs.
    #[serde(rename = "sy_dist")]
    pub distance_pc: Option<f64>,
    /// Upper error bound on the distance, parsecs.
    #[serde(rename = "sy_disterr1")]
    pub distance_err_pc: Option<f64>,
}

/// One catalogued planet from the PHL habitability export.
#[derive(Debug, Clone, Deserialize)]
pub struct HabitabilityRecord {
    #[serde(rename = "P_NAME")]
    pub name: String,
    /// 0 = not habitable, 1/2 = habitable candidate tiers.
    #[serde(rename = "P_HABITABLE")]
    pub habitable_code: Option<i64>,
    /// Star temperature class letter (O..M).
    #[serde(rename = "S_TYPE_TEMP")]
    pub star_class: Option<String>,
    /// Mass-based planet bucket (Miniterran..Jovian).
    #[serde(rename = "P_TYPE")]
    pub planet_type: Option<String>,
    /// Star age, billions of years.
    #[serde(rename = "S_AGE")]
    pub star_age_gyr: Option<f64>,
    /// Planet-to-star distance, AU.
    #[serde(rename = "P_DISTANCE")]
    pub planet_distance_au: Option<f64>,
    /// Star effective temperature, kelvin.
    #[serde(rename = "S_TEMPERATURE")]
    pub star_temperature_k: Option<f64>,
    #[serde(rename = "S_CONSTELLATION")]
    pub constellation: Option<String>,
}

impl HabitabilityRecord {
    pub fn habitability(&self) -> Option<HabitabilityFlag> {
        self.habitable_code.and_then(HabitabilityFlag::from_code)
    }

    /// Both candidate tiers count as habitable; missing flags do not.
    pub fn is_habitable(&self) -> bool {
        self.habitability().is_some_and(|f| f.is_habitable())
    }

    pub fn spectral_class(&self) -> Option<SpectralClass> {
        self.star_class.as_deref().and_then(SpectralClass::parse)
    }

    pub fn planet_class(&self) -> Option<PlanetClass> {
        self.planet_type.as_deref().and_then(PlanetClass::parse)
    }
}

/// Decode the NASA archive export.
pub fn decode_exoplanets(bytes: &[u8]) -> Result<Vec<ExoplanetRecord>> {
    decode_csv(bytes)
}

/// Decode the PHL habitability export.
pub fn decode_habitability(bytes: &[u8]) -> Result<Vec<HabitabilityRecord>> {
    decode_csv(bytes)
}

fn decode_csv<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEA_SAMPLE: &str = "\
pl_name,hostname,disc_year,discoverymethod,pl_orbper,sy_dist,sy_disterr1,extra_col
11 Com b,11 Com,2007,Radial Velocity,326.03,93.1846,1.9239,x
Proxima Cen b,Proxima Cen,2016,Radial Velocity,11.18,1.3012,0.0003,y
Mystery c,Mystery,,Transit,,,,z
";

    const PHL_SAMPLE: &str = "\
P_NAME,P_HABITABLE,S_TYPE_TEMP,P_TYPE,S_AGE,P_DISTANCE,S_TEMPERATURE,S_CONSTELLATION,P_MASS
Proxima Cen b,1,M,Terran,4.85,0.0485,3050.0,Centaurus,1.27
11 Com b,0,G,Jovian,,1.29,4742.0,Coma Berenices,6165.6
Blank Row d,,,,,,,,
";

    #[test]
    fn test_decode_exoplanets_ignores_extra_columns() {
        let rows = decode_exoplanets(NEA_SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "11 Com b");
        assert_eq!(rows[0].discovery_year, Some(2007));
        assert_eq!(rows[1].distance_pc, Some(1.3012));
    }

    #[test]
    fn test_decode_exoplanets_empty_numerics_are_none() {
        let rows = decode_exoplanets(NEA_SAMPLE.as_bytes()).unwrap();
        let mystery = &rows[2];
        assert_eq!(mystery.discovery_year, None);
        assert_eq!(mystery.orbital_period_days, None);
        assert_eq!(mystery.distance_pc, None);
        assert_eq!(mystery.discovery_method, "Transit");
    }

    #[test]
    fn test_decode_habitability_classes() {
        let rows = decode_habitability(PHL_SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);

        let proxima = &rows[0];
        assert!(proxima.is_habitable());
        assert_eq!(
            proxima.spectral_class(),
            Some(exoscope_common::SpectralClass::M)
        );
        assert_eq!(
            proxima.planet_class(),
            Some(exoscope_common::PlanetClass::Terran)
        );

        let com = &rows[1];
        assert!(!com.is_habitable());
        assert_eq!(com.star_age_gyr, None);

        let blank = &rows[2];
        assert!(!blank.is_habitable());
        assert_eq!(blank.spectral_class(), None);
        assert_eq!(blank.planet_class(), None);
    }

    #[test]
    fn test_decode_rejects_malformed_numeric() {
        let bad = "pl_name,hostname,disc_year,discoverymethod,pl_orbper,sy_dist,sy_disterr1\n\
                   Bad b,Bad,abc,Transit,1.0,2.0,3.0\n";
        assert!(decode_exoplanets(bad.as_bytes()).is_err());
    }
}
