//! HTTP handlers for all web routes, plus the shared page shell.

pub mod discoveries;
pub mod habitable;
pub mod home;
pub mod outlook;

use exoscope_analytics::DistributionTable;
use serde_json::Value;

/// Navigation HTML fragment shared across all pages.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Wrap a page body in the common document shell.
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} — Exoscope</title>
    <link rel="stylesheet" href="/static/css/main.css">
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
</head>
<body>
<div class="app-container">
{NAV_HTML}
<main class="main-content">
{body}
</main>
</div>
<script>
    var rawToggle = document.getElementById('show-raw');
    if (rawToggle) {{
        rawToggle.addEventListener('change', function () {{
            document.body.classList.toggle('show-raw', this.checked);
        }});
    }}
</script>
</body>
</html>"#
    )
}

/// Visible notice for a failed catalog load. The rest of the page, and the
/// navigation in particular, stays usable.
pub fn error_notice(context: &str, err: &exoscope_common::ExoscopeError) -> String {
    format!(
        r#"<div class="alert alert-danger">
            <strong>Could not load {context}.</strong>
            <p>{err}</p>
            <p class="text-muted">The catalog export may be temporarily unreachable. Reload to retry.</p>
        </div>"#
    )
}

/// A chart container plus the inline script that renders it.
pub fn chart_block(id: &str, figure: &Value) -> String {
    format!(
        r#"<div class="card">
    <div id="{id}" class="chart"></div>
    <script>
        (function () {{
            var fig = {figure};
            Plotly.newPlot("{id}", fig.data, fig.layout, {{ responsive: true }});
        }})();
    </script>
</div>"#
    )
}

/// Backing table for a distribution chart, hidden until the raw-data
/// checkbox is ticked.
pub fn distribution_table_html(caption: &str, table: &DistributionTable) -> String {
    let rows: String = table
        .categories
        .iter()
        .zip(table.all_pct.iter().zip(table.habitable_pct.iter()))
        .map(|(category, (all, habitable))| {
            format!("<tr><td>{category}</td><td>{all}%</td><td>{habitable}%</td></tr>")
        })
        .collect();

    format!(
        r#"<div class="raw-table table-container">
    <table class="table">
        <caption>{caption}</caption>
        <thead><tr><th>Category</th><th>Exoplanets</th><th>Habitable</th></tr></thead>
        <tbody>{rows}</tbody>
    </table>
</div>"#
    )
}
