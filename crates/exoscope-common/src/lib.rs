//! exoscope-common — Shared types, errors, and units used across all Exoscope crates.

pub mod categories;
pub mod error;
pub mod units;

// Re-export commonly used types
pub use categories::{HabitabilityFlag, PlanetClass, SpectralClass, StarAgeBin};
pub use error::{ExoscopeError, Result};
