//! Discovery timeline and detection-method charts.

use axum::{extract::State, response::Html, Json};
use serde_json::Value;

use crate::charts::{discovery_histogram, method_scatter};
use crate::error::ApiError;
use crate::handlers::{chart_block, error_notice, render_page};
use crate::state::SharedState;

pub async fn discoveries_page(State(state): State<SharedState>) -> Html<String> {
    let body = match state.store.exoplanets().await {
        Err(err) => error_notice("the NASA archive export", &err),
        Ok(snapshot) => {
            let histogram = chart_block("discoveries-by-year", &discovery_histogram(&snapshot.records));
            let scatter = chart_block("method-scatter", &method_scatter(&snapshot.records));
            format!(
                r#"<div class="page-header">
    <h1 class="page-title">How exoplanets are discovered</h1>
    <p class="text-muted">Of tools and people</p>
</div>

{histogram}

<div class="card">
    <p><strong>The radial velocity method.</strong>
    A planet's gravity shifts the motion of its star. Sensors on Earth see the
    star's spectrum swing between blue and red; the timing of that swing gives
    physical parameters such as speed, mass and distance.</p>
    <p><strong>And the transit method?</strong>
    It watches for a constant, repeating dip in a star's brightness. When a
    planet crosses in front of its star it casts a shadow that dims the light
    measured from Earth.</p>
</div>

{scatter}"#
            )
        }
    };
    Html(render_page("Discoveries", &body))
}

/// GET /api/discoveries/by-year
pub async fn api_by_year(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let snapshot = state.store.exoplanets().await?;
    Ok(Json(discovery_histogram(&snapshot.records)))
}

/// GET /api/discoveries/method-scatter
pub async fn api_method_scatter(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let snapshot = state.store.exoplanets().await?;
    Ok(Json(method_scatter(&snapshot.records)))
}
