//! Fixed category vocabularies used by the distribution charts.
//!
//! Each enum carries its canonical display order so that every chart and
//! table lists categories the same way regardless of which ones the data
//! actually populates.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Spectral class
// ---------------------------------------------------------------------------

/// Star classification by surface temperature, hottest (O) to coolest (M).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    /// Canonical chart order, hottest first.
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    /// Parse the temperature-class column of the habitability catalog.
    /// Unknown or empty values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "O" => Some(SpectralClass::O),
            "B" => Some(SpectralClass::B),
            "A" => Some(SpectralClass::A),
            "F" => Some(SpectralClass::F),
            "G" => Some(SpectralClass::G),
            "K" => Some(SpectralClass::K),
            "M" => Some(SpectralClass::M),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Planet mass class
// ---------------------------------------------------------------------------

/// Mass-based planet bucket relative to Earth's mass, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetClass {
    Miniterran,
    Subterran,
    Terran,
    Superterran,
    Neptunian,
    Jovian,
}

impl PlanetClass {
    /// Canonical chart order, lightest first.
    pub const ALL: [PlanetClass; 6] = [
        PlanetClass::Miniterran,
        PlanetClass::Subterran,
        PlanetClass::Terran,
        PlanetClass::Superterran,
        PlanetClass::Neptunian,
        PlanetClass::Jovian,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Miniterran" => Some(PlanetClass::Miniterran),
            "Subterran" => Some(PlanetClass::Subterran),
            "Terran" => Some(PlanetClass::Terran),
            "Superterran" => Some(PlanetClass::Superterran),
            "Neptunian" => Some(PlanetClass::Neptunian),
            "Jovian" => Some(PlanetClass::Jovian),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetClass::Miniterran => "Miniterran",
            PlanetClass::Subterran => "Subterran",
            PlanetClass::Terran => "Terran",
            PlanetClass::Superterran => "Superterran",
            PlanetClass::Neptunian => "Neptunian",
            PlanetClass::Jovian => "Jovian",
        }
    }
}

impl fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Habitability flag
// ---------------------------------------------------------------------------

/// Source-provided integer classification: 0 = not habitable,
/// 1 = conservative habitable candidate, 2 = optimistic candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HabitabilityFlag {
    NotHabitable,
    Conservative,
    Optimistic,
}

impl HabitabilityFlag {
    /// Decode the catalog integer. Anything outside {0, 1, 2} is `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(HabitabilityFlag::NotHabitable),
            1 => Some(HabitabilityFlag::Conservative),
            2 => Some(HabitabilityFlag::Optimistic),
            _ => None,
        }
    }

    /// Both candidate tiers count as habitable.
    pub fn is_habitable(&self) -> bool {
        !matches!(self, HabitabilityFlag::NotHabitable)
    }
}

// ---------------------------------------------------------------------------
// Star age bin
// ---------------------------------------------------------------------------

/// Star age bucketed into 2 Gyr bins; the last bin absorbs everything older.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarAgeBin {
    Under2,
    From2To4,
    From4To6,
    From6To8,
    From8To10,
    Over10,
}

impl StarAgeBin {
    pub const ALL: [StarAgeBin; 6] = [
        StarAgeBin::Under2,
        StarAgeBin::From2To4,
        StarAgeBin::From4To6,
        StarAgeBin::From6To8,
        StarAgeBin::From8To10,
        StarAgeBin::Over10,
    ];

    /// Bucket an age in Gyr. Negative ages are rejected as catalog noise.
    pub fn from_age_gyr(age: f64) -> Option<Self> {
        if !age.is_finite() || age < 0.0 {
            return None;
        }
        Some(match age {
            a if a < 2.0 => StarAgeBin::Under2,
            a if a < 4.0 => StarAgeBin::From2To4,
            a if a < 6.0 => StarAgeBin::From4To6,
            a if a < 8.0 => StarAgeBin::From6To8,
            a if a < 10.0 => StarAgeBin::From8To10,
            _ => StarAgeBin::Over10,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StarAgeBin::Under2 => "<2",
            StarAgeBin::From2To4 => "2-4",
            StarAgeBin::From4To6 => "4-6",
            StarAgeBin::From6To8 => "6-8",
            StarAgeBin::From8To10 => "8-10",
            StarAgeBin::Over10 => "+10",
        }
    }
}

impl fmt::Display for StarAgeBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spectral_class_order() {
        let order: Vec<&str> = SpectralClass::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(order, ["O", "B", "A", "F", "G", "K", "M"]);
    }

    #[test]
    fn test_spectral_class_parse_rejects_unknown() {
        assert_eq!(SpectralClass::parse("G"), Some(SpectralClass::G));
        assert_eq!(SpectralClass::parse(" K "), Some(SpectralClass::K));
        assert_eq!(SpectralClass::parse("X"), None);
        assert_eq!(SpectralClass::parse(""), None);
    }

    #[test]
    fn test_habitability_flag_codes() {
        assert!(!HabitabilityFlag::from_code(0).unwrap().is_habitable());
        assert!(HabitabilityFlag::from_code(1).unwrap().is_habitable());
        assert!(HabitabilityFlag::from_code(2).unwrap().is_habitable());
        assert_eq!(HabitabilityFlag::from_code(3), None);
    }

    #[test]
    fn test_age_bins() {
        assert_eq!(StarAgeBin::from_age_gyr(0.0), Some(StarAgeBin::Under2));
        assert_eq!(StarAgeBin::from_age_gyr(1.99), Some(StarAgeBin::Under2));
        assert_eq!(StarAgeBin::from_age_gyr(2.0), Some(StarAgeBin::From2To4));
        assert_eq!(StarAgeBin::from_age_gyr(9.9), Some(StarAgeBin::From8To10));
        // the last bin absorbs all older stars
        assert_eq!(StarAgeBin::from_age_gyr(10.0), Some(StarAgeBin::Over10));
        assert_eq!(StarAgeBin::from_age_gyr(13.8), Some(StarAgeBin::Over10));
        assert_eq!(StarAgeBin::from_age_gyr(-1.0), None);
        assert_eq!(StarAgeBin::from_age_gyr(f64::NAN), None);
    }
}
