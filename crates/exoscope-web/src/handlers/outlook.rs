//! Outlook page — how machine learning could help astrophysicists.
//! Static narrative, no computation.

use axum::response::Html;

use crate::handlers::render_page;

pub async fn outlook_page() -> Html<String> {
    Html(render_page(
        "Outlook",
        r#"<div class="page-header">
    <h1 class="page-title">Artificial intelligence in the search for life</h1>
    <p class="text-muted">How machine learning can help astrophysicists</p>
</div>

<div class="card">
    <p>The habitable-zone cuts shown on the previous page are deliberately crude:
    a temperature band and a distance cutoff. Habitability depends on many more
    variables — atmosphere, magnetic field, stellar activity, heavy-element
    abundance near the galactic centre.</p>
    <p>Those variables are exactly what a learned model can weigh. Trained on the
    catalogued candidates, a classifier could flag promising worlds in new survey
    data long before a human review, pointing telescopes where follow-up time is
    best spent.</p>
</div>"#,
    ))
}
