//! Configuration loading for Exoscope.
//! Reads exoscope.toml from the current directory or path in EXOSCOPE_CONFIG env var.
//!
//! Every field has a serde default, so a missing file yields a fully usable
//! configuration pointing at the public catalog exports.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub datasets: DatasetConfig,
    #[serde(default)]
    pub habitable_zone: HabitableZoneConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Source locators for the two catalog exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_exoplanets_url")]
    pub exoplanets_url: String,
    #[serde(default = "default_habitability_url")]
    pub habitability_url: String,
}

fn default_exoplanets_url() -> String {
    "https://raw.githubusercontent.com/MickaelKohler/Exoplanet_Discovery/main/planets.csv".to_string()
}
fn default_habitability_url() -> String {
    "http://www.hpcf.upr.edu/~abel/phl/hec2/database/phl_exoplanet_catalog.csv".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            exoplanets_url: default_exoplanets_url(),
            habitability_url: default_habitability_url(),
        }
    }
}

/// Habitable-zone filter bounds.
///
/// The defaults mirror the catalog authors' cuts (main-sequence temperature
/// band, near-orbit distance cutoff). They are deliberately configurable:
/// the catalogs document no derivation for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitableZoneConfig {
    /// Lower bound on star effective temperature, kelvin (exclusive).
    #[serde(default = "default_min_star_temp_k")]
    pub min_star_temperature_k: f64,
    /// Upper bound on star effective temperature, kelvin (exclusive).
    #[serde(default = "default_max_star_temp_k")]
    pub max_star_temperature_k: f64,
    /// Upper bound on planet-to-star distance, AU (exclusive).
    #[serde(default = "default_max_planet_distance_au")]
    pub max_planet_distance_au: f64,
}

fn default_min_star_temp_k() -> f64 { 2500.0 }
fn default_max_star_temp_k() -> f64 { 8000.0 }
fn default_max_planet_distance_au() -> f64 { 2.0 }

impl Default for HabitableZoneConfig {
    fn default() -> Self {
        Self {
            min_star_temperature_k: default_min_star_temp_k(),
            max_star_temperature_k: default_max_star_temp_k(),
            max_planet_distance_au: default_max_planet_distance_au(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from exoscope.toml.
    /// Checks EXOSCOPE_CONFIG env var first, then current directory.
    /// A missing file falls back to defaults rather than failing.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("EXOSCOPE_CONFIG")
            .unwrap_or_else(|_| "exoscope.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_usable() {
        let cfg = Config::default();
        assert!(cfg.datasets.exoplanets_url.starts_with("https://"));
        assert_eq!(cfg.habitable_zone.min_star_temperature_k, 2500.0);
        assert_eq!(cfg.habitable_zone.max_star_temperature_k, 8000.0);
        assert_eq!(cfg.habitable_zone.max_planet_distance_au, 2.0);
        assert_eq!(cfg.server.port, 3001);
    }

    #[test]
    fn test_zone_band_is_ordered() {
        let zone = HabitableZoneConfig::default();
        assert!(
            zone.min_star_temperature_k < zone.max_star_temperature_k,
            "Temperature band lower bound ({}) must sit below upper bound ({})",
            zone.min_star_temperature_k,
            zone.max_star_temperature_k
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[habitable_zone]\nmax_planet_distance_au = 1.5\n\n[server]\nport = 8080"
        )
        .unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert_eq!(cfg.habitable_zone.max_planet_distance_au, 1.5);
        assert_eq!(cfg.habitable_zone.min_star_temperature_k, 2500.0);
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(!cfg.datasets.habitability_url.is_empty());
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = Config::default();
        let text = toml::to_string(&cfg).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.server.port, cfg.server.port);
        assert_eq!(
            parsed.habitable_zone.max_planet_distance_au,
            cfg.habitable_zone.max_planet_distance_au
        );
    }
}
