//! Plotly figure builders.
//!
//! Each function turns a table or derived table into a `{data, layout}`
//! JSON value the page hands straight to `Plotly.newPlot`. Traces are
//! grouped with `BTreeMap` so legend order is stable across renders.

use exoscope_analytics::{DistributionTable, JoinedRecord, ZoneLabel, ZoneRow};
use exoscope_data::ExoplanetRecord;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Histogram of discovery year, one trace per discovery method.
pub fn discovery_histogram(rows: &[ExoplanetRecord]) -> Value {
    let mut by_method: BTreeMap<&str, Vec<i32>> = BTreeMap::new();
    for row in rows {
        if let Some(year) = row.discovery_year {
            by_method
                .entry(row.discovery_method.as_str())
                .or_default()
                .push(year);
        }
    }

    let data: Vec<Value> = by_method
        .into_iter()
        .map(|(method, years)| {
            json!({
                "type": "histogram",
                "name": method,
                "x": years,
                "nbinsx": 10,
            })
        })
        .collect();

    json!({
        "data": data,
        "layout": {
            "title": { "text": "Planets discovered per year and per method" },
            "barmode": "stack",
            "xaxis": { "title": { "text": "Discovery year" } },
            "yaxis": { "title": { "text": "Planets" } },
        }
    })
}

/// Scatter of distance error vs orbital period, one trace per method.
/// Axis windows match the catalog's dense region.
pub fn method_scatter(rows: &[ExoplanetRecord]) -> Value {
    let mut by_method: BTreeMap<&str, (Vec<f64>, Vec<f64>, Vec<&str>)> = BTreeMap::new();
    for row in rows {
        if let (Some(err), Some(period)) = (row.distance_err_pc, row.orbital_period_days) {
            let entry = by_method.entry(row.discovery_method.as_str()).or_default();
            entry.0.push(err);
            entry.1.push(period);
            entry.2.push(row.name.as_str());
        }
    }

    let data: Vec<Value> = by_method
        .into_iter()
        .map(|(method, (x, y, text))| {
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": method,
                "x": x,
                "y": y,
                "text": text,
            })
        })
        .collect();

    json!({
        "data": data,
        "layout": {
            "title": { "text": "Detection methods by orbital period and distance to Earth" },
            "xaxis": { "title": { "text": "Distance to Earth (error bound)" }, "range": [-2, 200] },
            "yaxis": { "title": { "text": "Orbital period (days)" }, "range": [0, 200] },
        }
    })
}

/// Constellation -> host star -> planet sunburst over habitable rows.
/// Rows missing any of the three labels are dropped.
pub fn constellation_sunburst(rows: &[JoinedRecord]) -> Value {
    let mut ids: Vec<String> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    let mut parents: Vec<String> = Vec::new();
    let mut push = |id: String, label: &str, parent: String| {
        if !ids.contains(&id) {
            ids.push(id);
            labels.push(label.to_string());
            parents.push(parent);
        }
    };

    for row in rows.iter().filter(|r| r.is_habitable()) {
        let Some(constellation) = row.constellation() else {
            continue;
        };
        let host = row.planet.host_star.as_str();
        let planet = row.name();

        let const_id = constellation.to_string();
        let host_id = format!("{constellation}/{host}");
        let planet_id = format!("{constellation}/{host}/{planet}");

        push(const_id.clone(), constellation, String::new());
        push(host_id.clone(), host, const_id);
        push(planet_id, planet, host_id);
    }

    json!({
        "data": [{
            "type": "sunburst",
            "ids": ids,
            "labels": labels,
            "parents": parents,
            "maxdepth": 2,
        }],
        "layout": {
            "title": { "text": "Where are the habitable planets?" },
            "margin": { "l": 10, "r": 10, "b": 10, "t": 30 },
        }
    })
}

/// Habitable-zone scatter: two traces, habitable rows drawn on top.
pub fn zone_scatter(rows: &[ZoneRow]) -> Value {
    let trace = |label: ZoneLabel, color: &str, opacity: f64| -> Value {
        let selected: Vec<&ZoneRow> = rows.iter().filter(|r| r.label == label).collect();
        json!({
            "type": "scatter",
            "mode": "markers",
            "name": label.as_str(),
            "x": selected.iter().map(|r| r.planet_distance_au).collect::<Vec<_>>(),
            "y": selected.iter().map(|r| r.star_temperature_k).collect::<Vec<_>>(),
            "text": selected.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            "marker": { "color": color, "opacity": opacity },
        })
    };

    json!({
        "data": [
            trace(ZoneLabel::NonHabitable, "coral", 0.3),
            trace(ZoneLabel::Habitable, "darkgreen", 1.0),
        ],
        "layout": {
            "title": { "text": "Habitable planets by star heat and orbit distance" },
            "xaxis": { "title": { "text": "Planet-to-star distance (AU)" } },
            "yaxis": { "title": { "text": "Star temperature (K)" } },
            "margin": { "l": 10, "r": 10, "b": 10, "t": 70 },
        }
    })
}

/// Grouped bar chart comparing the all-exoplanets and habitable-only series.
pub fn distribution_bars(table: &DistributionTable, title: &str, x_title: &str) -> Value {
    let series = |name: &str, values: &[f64]| -> Value {
        json!({
            "type": "bar",
            "name": name,
            "x": table.categories,
            "y": values,
            "text": values,
            "texttemplate": "%{text}%",
            "textposition": "outside",
        })
    };

    json!({
        "data": [
            series("Exoplanets", &table.all_pct),
            series("Habitable", &table.habitable_pct),
        ],
        "layout": {
            "title": { "text": title },
            "barmode": "group",
            "xaxis": { "title": { "text": x_title } },
            "margin": { "l": 10, "r": 10, "b": 10 },
            "legend": { "x": 0, "y": 1 },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use exoscope_analytics::left_join;
    use exoscope_data::{ExoplanetRecord, HabitabilityRecord};

    fn planet(name: &str, method: &str, year: Option<i32>) -> ExoplanetRecord {
        ExoplanetRecord {
            name: name.to_string(),
            host_star: format!("{name} host"),
            discovery_year: year,
            discovery_method: method.to_string(),
            orbital_period_days: Some(12.0),
            distance_pc: Some(10.0),
            distance_err_pc: Some(0.5),
        }
    }

    fn habitable(name: &str, constellation: Option<&str>) -> HabitabilityRecord {
        HabitabilityRecord {
            name: name.to_string(),
            habitable_code: Some(1),
            star_class: Some("M".to_string()),
            planet_type: Some("Terran".to_string()),
            star_age_gyr: Some(4.0),
            planet_distance_au: Some(0.05),
            star_temperature_k: Some(3000.0),
            constellation: constellation.map(str::to_string),
        }
    }

    #[test]
    fn test_histogram_one_trace_per_method() {
        let rows = vec![
            planet("a", "Transit", Some(2009)),
            planet("b", "Transit", Some(2010)),
            planet("c", "Radial Velocity", Some(1995)),
            planet("d", "Transit", None), // no year: excluded
        ];
        let fig = discovery_histogram(&rows);
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Radial Velocity");
        assert_eq!(data[1]["x"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_sunburst_builds_three_level_hierarchy() {
        let left = vec![planet("Proxima Cen b", "Radial Velocity", Some(2016))];
        let right = vec![habitable("Proxima Cen b", Some("Centaurus"))];
        let fig = constellation_sunburst(&left_join(&left, &right));

        let ids = fig["data"][0]["ids"].as_array().unwrap();
        let parents = fig["data"][0]["parents"].as_array().unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(parents[0], "");
        assert_eq!(parents[1], "Centaurus");
        assert_eq!(parents[2], "Centaurus/Proxima Cen b host");
    }

    #[test]
    fn test_sunburst_skips_rows_without_constellation() {
        let left = vec![planet("a", "Transit", Some(2010))];
        let right = vec![habitable("a", None)];
        let fig = constellation_sunburst(&left_join(&left, &right));
        assert!(fig["data"][0]["ids"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_distribution_bars_carry_both_series() {
        let table = DistributionTable {
            categories: vec!["G".into(), "M".into()],
            all_pct: vec![60.0, 40.0],
            habitable_pct: vec![0.0, 100.0],
        };
        let fig = distribution_bars(&table, "t", "x");
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Exoplanets");
        assert_eq!(data[1]["y"][1], 100.0);
        assert_eq!(fig["layout"]["barmode"], "group");
    }
}
