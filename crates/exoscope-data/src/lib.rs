//! exoscope-data — catalog records, CSV decoding, remote fetch, and the
//! process-wide memoized dataset store.

pub mod catalog;
pub mod fetch;
pub mod store;

pub use catalog::{ExoplanetRecord, HabitabilityRecord};
pub use store::{CatalogSnapshot, DatasetStore};
