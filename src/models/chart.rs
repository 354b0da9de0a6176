use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Outcome;

/// A declarative chart value handed to the external renderer.
///
/// Every user interaction replaces the affected chart slot wholesale with a
/// freshly derived description; nothing here is updated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartDescription {
    Pie(PieChart),
    Scatter(ScatterChart),
}

/// Pie-chart shape: parallel category labels and values, plus an optional
/// label-to-color mapping for renderers that honor fixed colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<BTreeMap<String, String>>,
}

/// Scatter-plot shape: payload mass against launch outcome, one series per
/// booster version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass in kilograms.
    pub x: f64,
    /// Launch outcome, serialized as 0 or 1.
    pub y: Outcome,
    /// Booster version, the series key the renderer colors by.
    pub series: String,
}
