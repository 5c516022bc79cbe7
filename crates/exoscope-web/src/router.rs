//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    discoveries::{api_by_year, api_method_scatter, discoveries_page},
    habitable::{
        api_constellations, api_nearest, api_planet_types, api_star_ages, api_star_types,
        api_zone, habitable_page,
    },
    home::home,
    outlook::outlook_page,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(home))
        .route("/discoveries", get(discoveries_page))
        .route("/habitable", get(habitable_page))
        .route("/outlook", get(outlook_page))
        // API endpoints
        .route("/api/discoveries/by-year", get(api_by_year))
        .route("/api/discoveries/method-scatter", get(api_method_scatter))
        .route("/api/habitable/constellations", get(api_constellations))
        .route("/api/habitable/zone", get(api_zone))
        .route("/api/habitable/star-types", get(api_star_types))
        .route("/api/habitable/star-ages", get(api_star_ages))
        .route("/api/habitable/planet-types", get(api_planet_types))
        .route("/api/habitable/nearest", get(api_nearest))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
