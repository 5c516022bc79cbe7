//! exoscope-web — Web GUI for Exoscope
//! Serves a four-view exoplanet dashboard:
//!   - Home with catalog stats
//!   - Discovery timeline and method charts
//!   - Habitable worlds: sunburst, zone scatter, distribution comparisons
//!   - Outlook narrative
//! Chart data is built server-side as Plotly trace JSON and also exposed
//! under /api for programmatic use.

pub mod charts;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
