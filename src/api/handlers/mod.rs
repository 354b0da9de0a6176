use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::charts;
use crate::dataset::Dataset;
use crate::models::{ChartDescription, SiteFilter};

// ============================================================
// Slider surface
// ============================================================

// The range control the dashboard renders. Fixed by the upstream layout;
// the dataset's own payload bounds are reported alongside but do not resize
// the slider.
const SLIDER_MIN: f64 = 0.0;
const SLIDER_MAX: f64 = 10_000.0;
const SLIDER_STEP: f64 = 1_000.0;
const SLIDER_DEFAULT_LOW: f64 = 3_000.0;
const SLIDER_DEFAULT_HIGH: f64 = 6_000.0;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Dashboard page
// ============================================================

/// The embedded dashboard shell: dropdown, range slider, and two chart slots
/// that refetch their chart descriptions from the JSON endpoints on every
/// control change.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(include_str!("../../../static/dashboard.html"))
}

// ============================================================
// Layout metadata
// ============================================================

/// Everything the dashboard needs to lay itself out: dropdown options in
/// first-appearance order, the dataset's payload bounds, and the fixed
/// slider surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaResponse {
    pub sites: Vec<String>,
    pub payload_min: f64,
    pub payload_max: f64,
    pub slider: SliderSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_low: f64,
    pub default_high: f64,
}

pub async fn get_meta(State(dataset): State<Dataset>) -> Json<MetaResponse> {
    let (payload_min, payload_max) = dataset.payload_bounds();
    Json(MetaResponse {
        sites: dataset.sites().to_vec(),
        payload_min,
        payload_max,
        slider: SliderSpec {
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            step: SLIDER_STEP,
            default_low: SLIDER_DEFAULT_LOW,
            default_high: SLIDER_DEFAULT_HIGH,
        },
    })
}

// ============================================================
// Chart slots
// ============================================================

/// Query parameters for the success-ratio pie chart.
#[derive(Debug, Deserialize)]
pub struct PieQuery {
    /// Site selection. Defaults to all sites.
    #[serde(default)]
    pub site: SiteFilter,
}

pub async fn success_pie_chart(
    State(dataset): State<Dataset>,
    Query(query): Query<PieQuery>,
) -> Json<ChartDescription> {
    Json(charts::success_pie(&dataset, &query.site))
}

/// Query parameters for the payload-vs-outcome scatter chart.
///
/// The interval is taken as-is; an inverted or out-of-range interval is a
/// valid filter that may match nothing.
#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    #[serde(default)]
    pub site: SiteFilter,
    /// Lower payload bound in kg. Defaults to the slider's default selection.
    pub low: Option<f64>,
    /// Upper payload bound in kg. Defaults to the slider's default selection.
    pub high: Option<f64>,
}

pub async fn payload_scatter_chart(
    State(dataset): State<Dataset>,
    Query(query): Query<ScatterQuery>,
) -> Json<ChartDescription> {
    let low = query.low.unwrap_or(SLIDER_DEFAULT_LOW);
    let high = query.high.unwrap_or(SLIDER_DEFAULT_HIGH);
    Json(charts::payload_scatter(&dataset, (low, high), &query.site))
}
