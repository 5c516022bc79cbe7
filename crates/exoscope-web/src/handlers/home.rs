//! Home page — catalog overview stats and narrative.

use axum::{extract::State, response::Html};

use crate::handlers::{error_notice, render_page};
use crate::state::SharedState;

pub async fn home(State(state): State<SharedState>) -> Html<String> {
    let body = match state.joined().await {
        Err(err) => error_notice("the exoplanet catalogs", &err),
        Ok(rows) => {
            let total = rows.len();
            let catalogued = rows.iter().filter(|r| r.habitat.is_some()).count();
            let habitable = rows.iter().filter(|r| r.is_habitable()).count();
            render_stats(total, catalogued, habitable)
        }
    };
    Html(render_page("Home", &body))
}

fn render_stats(total: usize, catalogued: usize, habitable: usize) -> String {
    format!(
        r#"<div class="page-header">
    <h1 class="page-title">Exoplanet Discovery</h1>
    <p class="text-muted">Giving life to the data</p>
</div>

<div class="stats-grid">
    <div class="stat-card">
        <div class="stat-value">{total}</div>
        <div class="stat-label">Confirmed exoplanets</div>
    </div>
    <div class="stat-card">
        <div class="stat-value">{catalogued}</div>
        <div class="stat-label">With habitability records</div>
    </div>
    <div class="stat-card">
        <div class="stat-value">{habitable}</div>
        <div class="stat-label">Habitable candidates</div>
    </div>
</div>

<div class="card">
    <p>
        On 6 October 1995, astronomers Michel Mayor and Didier Queloz announced
        the first discovery of an exoplanet. That planet, <strong>51 Pegasi b</strong>,
        sits about fifty light-years from Earth in the Pegasus constellation.
    </p>
    <p>
        Since then, thousands of worlds have been confirmed. This dashboard walks
        through how they were found, and which of them might host life.
    </p>
</div>"#
    )
}
