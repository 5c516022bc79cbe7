//! exoscope-analytics — pure, stateless transforms over the joined catalog
//! tables: join, habitable-zone filter, categorical distribution comparison,
//! and nearest-candidate lookup.

pub mod distribution;
pub mod join;
pub mod nearest;
pub mod zone;

pub use distribution::{
    planet_class_distribution, star_age_distribution, star_class_distribution, DistributionTable,
};
pub use join::{habitable_subset, left_join, JoinedRecord};
pub use nearest::{nearest_habitable, NearestCandidate};
pub use zone::{zone_rows, ZoneLabel, ZoneRow};
