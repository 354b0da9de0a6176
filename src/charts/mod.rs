//! Chart derivation: pure functions from the immutable dataset plus the
//! current selection to declarative [`ChartDescription`] values.
//!
//! Both functions are deterministic and total over every input the bound
//! controls can produce. An empty filtered subset is not an error; it yields
//! a degenerate chart the renderer draws as empty.

use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::models::{
    ChartDescription, Outcome, PieChart, ScatterChart, ScatterPoint, SiteFilter,
};

/// Fixed pie colors for the single-site view.
pub const FAILURE_COLOR: &str = "red";
pub const SUCCESS_COLOR: &str = "green";

/// Y-axis label for the payload scatter plot.
pub const OUTCOME_AXIS_LABEL: &str = "Launch Outcome (0=Failure, 1=Success)";

/// Derive the success-ratio pie chart for the current site selection.
pub fn success_pie(dataset: &Dataset, site: &SiteFilter) -> ChartDescription {
    match site {
        SiteFilter::All => all_sites_pie(dataset),
        SiteFilter::Site(name) => single_site_pie(dataset, name),
    }
}

/// Success counts per site, one category per known site in first-appearance
/// order. Sites with zero successes keep their slot so the category set is
/// stable across selections.
fn all_sites_pie(dataset: &Dataset) -> ChartDescription {
    let sites = dataset.sites();
    let mut values = vec![0u64; sites.len()];
    for record in dataset.records() {
        if record.outcome == Outcome::Success {
            if let Some(idx) = sites.iter().position(|s| *s == record.site) {
                values[idx] += 1;
            }
        }
    }

    ChartDescription::Pie(PieChart {
        title: "Total Success Launches by Site".to_string(),
        labels: sites.to_vec(),
        values,
        colors: None,
    })
}

/// Outcome counts for one site. Both outcome categories always chart, even
/// at zero count, with failure (0) before success (1).
fn single_site_pie(dataset: &Dataset, site: &str) -> ChartDescription {
    let mut failures = 0u64;
    let mut successes = 0u64;
    for record in dataset.records().iter().filter(|r| r.site == site) {
        match record.outcome {
            Outcome::Failure => failures += 1,
            Outcome::Success => successes += 1,
        }
    }

    let colors = BTreeMap::from([
        (Outcome::Failure.as_label().to_string(), FAILURE_COLOR.to_string()),
        (Outcome::Success.as_label().to_string(), SUCCESS_COLOR.to_string()),
    ]);

    ChartDescription::Pie(PieChart {
        title: format!("Success vs Failed Launches for {site}"),
        labels: vec![
            Outcome::Failure.as_label().to_string(),
            Outcome::Success.as_label().to_string(),
        ],
        values: vec![failures, successes],
        colors: Some(colors),
    })
}

/// Derive the payload-vs-outcome scatter chart.
///
/// The interval is inclusive at both ends and deliberately unvalidated: an
/// inverted interval is a valid predicate that matches nothing.
pub fn payload_scatter(
    dataset: &Dataset,
    payload_range: (f64, f64),
    site: &SiteFilter,
) -> ChartDescription {
    let (low, high) = payload_range;
    let points = dataset
        .records()
        .iter()
        .filter(|r| r.payload_mass_kg >= low && r.payload_mass_kg <= high)
        .filter(|r| site.matches(&r.site))
        .map(|r| ScatterPoint {
            x: r.payload_mass_kg,
            y: r.outcome,
            series: r.booster_version.clone(),
        })
        .collect();

    let title = match site {
        SiteFilter::All => "Payload vs Success for All Sites".to_string(),
        SiteFilter::Site(name) => format!("Payload vs Success for {name}"),
    };

    ChartDescription::Scatter(ScatterChart {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        y_label: OUTCOME_AXIS_LABEL.to_string(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LaunchRecord;

    fn record(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version: "F9 v1.1".to_string(),
        }
    }

    #[test]
    fn single_site_pie_synthesizes_missing_outcome_category() {
        // Site with successes only: the failure slice must still appear.
        let dataset = Dataset::from_records(vec![
            record("KSC LC-39A", 4000.0, Outcome::Success),
            record("KSC LC-39A", 5000.0, Outcome::Success),
        ]);

        let ChartDescription::Pie(pie) =
            success_pie(&dataset, &SiteFilter::Site("KSC LC-39A".to_string()))
        else {
            panic!("expected a pie chart");
        };

        assert_eq!(pie.labels, vec!["0", "1"]);
        assert_eq!(pie.values, vec![0, 2]);
    }

    #[test]
    fn single_site_pie_uses_fixed_outcome_colors() {
        let dataset = Dataset::from_records(vec![record("VAFB SLC-4E", 500.0, Outcome::Failure)]);

        let ChartDescription::Pie(pie) =
            success_pie(&dataset, &SiteFilter::Site("VAFB SLC-4E".to_string()))
        else {
            panic!("expected a pie chart");
        };

        let colors = pie.colors.expect("single-site pie carries a color map");
        assert_eq!(colors.get("0").map(String::as_str), Some(FAILURE_COLOR));
        assert_eq!(colors.get("1").map(String::as_str), Some(SUCCESS_COLOR));
    }

    #[test]
    fn scatter_title_names_the_selected_site() {
        let dataset = Dataset::from_records(vec![record("CCAFS LC-40", 3000.0, Outcome::Success)]);

        let ChartDescription::Scatter(scatter) = payload_scatter(
            &dataset,
            (0.0, 10_000.0),
            &SiteFilter::Site("CCAFS LC-40".to_string()),
        ) else {
            panic!("expected a scatter chart");
        };

        assert_eq!(scatter.title, "Payload vs Success for CCAFS LC-40");
        assert_eq!(scatter.y_label, OUTCOME_AXIS_LABEL);
    }

    #[test]
    fn inverted_interval_yields_empty_scatter() {
        let dataset = Dataset::from_records(vec![record("CCAFS LC-40", 3000.0, Outcome::Success)]);

        let ChartDescription::Scatter(scatter) =
            payload_scatter(&dataset, (6000.0, 3000.0), &SiteFilter::All)
        else {
            panic!("expected a scatter chart");
        };

        assert!(scatter.points.is_empty());
    }
}
