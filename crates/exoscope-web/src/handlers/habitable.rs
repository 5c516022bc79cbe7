//! Habitable worlds view: sunburst, nearest candidate, habitable-zone
//! scatter, and the three distribution comparisons.

use axum::{extract::State, response::Html, Json};
use serde_json::Value;

use exoscope_analytics::{
    nearest_habitable, planet_class_distribution, star_age_distribution,
    star_class_distribution, zone_rows, JoinedRecord, ZoneRow,
};

use crate::charts::{constellation_sunburst, distribution_bars, zone_scatter};
use crate::error::ApiError;
use crate::handlers::{chart_block, distribution_table_html, error_notice, render_page};
use crate::state::SharedState;

pub async fn habitable_page(State(state): State<SharedState>) -> Html<String> {
    let body = match state.joined().await {
        Err(err) => error_notice("the joined exoplanet catalogs", &err),
        Ok(rows) => render_habitable(&state, &rows),
    };
    Html(render_page("Habitable worlds", &body))
}

fn render_habitable(state: &SharedState, rows: &[JoinedRecord]) -> String {
    let total = rows.len();
    let habitable = rows.iter().filter(|r| r.is_habitable()).count();

    let sunburst = chart_block("constellations", &constellation_sunburst(rows));
    let constellation_table = constellation_table_html(rows);

    let nearest_text = match nearest_habitable(rows) {
        Some(candidate) => format!(
            "<p><strong>Where is the closest one?</strong> The nearest potentially \
             habitable planet is <strong>{}</strong>, {} light-years away. For scale, \
             the Voyager 1 probe would need about 76 million years to reach it.</p>",
            candidate.name, candidate.distance_ly
        ),
        None => "<p class=\"text-muted\">No habitable candidate with a known distance \
                 is present in the current catalogs.</p>"
            .to_string(),
    };

    let zone = zone_rows(rows, &state.config.habitable_zone);
    let zone_chart = chart_block("habitable-zone", &zone_scatter(&zone));
    let zone_table = zone_table_html(&zone);

    let star_types = star_class_distribution(rows);
    let star_ages = star_age_distribution(rows);
    let planet_types = planet_class_distribution(rows);

    let star_type_chart = chart_block(
        "star-types",
        &distribution_bars(
            &star_types,
            "Exoplanets by the type of their sun (percent)",
            "Star category",
        ),
    );
    let star_age_chart = chart_block(
        "star-ages",
        &distribution_bars(
            &star_ages,
            "Exoplanets by the age of their star (percent)",
            "Star age (Gyr)",
        ),
    );
    let planet_type_chart = chart_block(
        "planet-types",
        &distribution_bars(
            &planet_types,
            "Exoplanets by their type (percent)",
            "Exoplanet type",
        ),
    );

    format!(
        r#"<div class="page-header">
    <h1 class="page-title">What characterises a habitable exoplanet</h1>
    <p class="text-muted">Where they are and what they are made of</p>
</div>

<div class="card">
    <p>The catalogs list <strong>{total}</strong> exoplanets, of which only
    <strong>{habitable}</strong> are considered potentially able to host life.</p>
</div>

{sunburst}
{constellation_table}

<div class="card">
    {nearest_text}
    <p>To count as habitable, a planet must sit in the <strong>habitable zone</strong>:
    the region of space where conditions favour the appearance of life as we know
    it on Earth. The chart below makes that zone visible — planets must orbit
    farther out as their star grows hotter.</p>
</div>

{zone_chart}
{zone_table}

<div class="card">
    <p>Which type of star favours habitable exoplanets? Mostly the K and M
    classes — the smallest and coolest stars in the comparison below.</p>
</div>

{star_type_chart}
{star_type_table}
{spectral_reference}

{star_age_chart}
{star_age_table}

<div class="card">
    <p>Observed exoplanets mostly orbit the youngest stars, though no age band
    stands out sharply. Habitable candidates cluster on planets about the size
    of Earth or slightly larger.</p>
</div>

{planet_type_chart}
{planet_type_table}
{planet_reference}"#,
        star_type_table = distribution_table_html("Star type distribution", &star_types),
        star_age_table = distribution_table_html("Star age distribution", &star_ages),
        planet_type_table = distribution_table_html("Planet type distribution", &planet_types),
        spectral_reference = SPECTRAL_REFERENCE,
        planet_reference = PLANET_REFERENCE,
    )
}

/// Spectral class temperature/colour reference, shown beside the star-type chart.
const SPECTRAL_REFERENCE: &str = r#"<div class="card table-container">
    <table class="table">
        <caption>Star classes by surface temperature</caption>
        <thead><tr><th>Class</th><th>Temperature</th><th>Colour</th></tr></thead>
        <tbody>
            <tr><td>O</td><td>&gt; 25,000 K</td><td>blue</td></tr>
            <tr><td>B</td><td>10,000–25,000 K</td><td>blue-white</td></tr>
            <tr><td>A</td><td>7,500–10,000 K</td><td>white</td></tr>
            <tr><td>F</td><td>6,000–7,500 K</td><td>yellow-white</td></tr>
            <tr><td>G</td><td>5,000–6,000 K</td><td>yellow (like the Sun)</td></tr>
            <tr><td>K</td><td>3,500–5,000 K</td><td>orange</td></tr>
            <tr><td>M</td><td>&lt; 3,500 K</td><td>red</td></tr>
        </tbody>
    </table>
</div>"#;

/// Planet mass classes relative to Earth's mass.
const PLANET_REFERENCE: &str = r#"<div class="card">
    <p>Exoplanet types by Earth masses (M⊕):</p>
    <ul>
        <li><em>Miniterran</em>: under 0.1 M⊕</li>
        <li><em>Subterran</em>: 0.1 to 0.5 M⊕</li>
        <li><em>Terran</em>: 0.5 to 2 M⊕</li>
        <li><em>Superterran</em>: 2 to 10 M⊕</li>
        <li><em>Neptunian</em>: 10 to 50 M⊕</li>
        <li><em>Jovian</em>: over 50 M⊕</li>
    </ul>
</div>"#;

/// Backing table for the constellation sunburst: habitable rows with a
/// known constellation. Hidden until the raw-data checkbox is ticked.
fn constellation_table_html(rows: &[JoinedRecord]) -> String {
    let body: String = rows
        .iter()
        .filter(|r| r.is_habitable())
        .filter_map(|r| {
            r.constellation().map(|constellation| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    r.name(),
                    r.planet.host_star,
                    constellation
                )
            })
        })
        .collect();

    format!(
        r#"<div class="raw-table table-container">
    <table class="table">
        <caption>Habitable planets by constellation</caption>
        <thead><tr><th>Planet</th><th>Host star</th><th>Constellation</th></tr></thead>
        <tbody>{body}</tbody>
    </table>
</div>"#
    )
}

/// Backing table for the habitable-zone scatter.
fn zone_table_html(rows: &[ZoneRow]) -> String {
    let body: String = rows
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                r.name,
                r.planet_distance_au,
                r.star_temperature_k,
                r.label.as_str()
            )
        })
        .collect();

    format!(
        r#"<div class="raw-table table-container">
    <table class="table">
        <caption>Habitable zone rows</caption>
        <thead><tr><th>Planet</th><th>Distance to star (AU)</th><th>Star temperature (K)</th><th>Label</th></tr></thead>
        <tbody>{body}</tbody>
    </table>
</div>"#
    )
}

// === API endpoints ===

/// GET /api/habitable/constellations
pub async fn api_constellations(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let rows = state.joined().await?;
    Ok(Json(constellation_sunburst(&rows)))
}

/// GET /api/habitable/zone
pub async fn api_zone(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let rows = state.joined().await?;
    let zone = zone_rows(&rows, &state.config.habitable_zone);
    Ok(Json(zone_scatter(&zone)))
}

/// GET /api/habitable/star-types
pub async fn api_star_types(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let rows = state.joined().await?;
    Ok(Json(serde_json::to_value(star_class_distribution(&rows))?))
}

/// GET /api/habitable/star-ages
pub async fn api_star_ages(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let rows = state.joined().await?;
    Ok(Json(serde_json::to_value(star_age_distribution(&rows))?))
}

/// GET /api/habitable/planet-types
pub async fn api_planet_types(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let rows = state.joined().await?;
    Ok(Json(serde_json::to_value(planet_class_distribution(&rows))?))
}

/// GET /api/habitable/nearest
pub async fn api_nearest(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let rows = state.joined().await?;
    Ok(Json(serde_json::to_value(nearest_habitable(&rows))?))
}
