mod handlers;

pub use handlers::{MetaResponse, SliderSpec};

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::dataset::Dataset;

pub fn create_router(dataset: Dataset) -> Router {
    let api = Router::new()
        // Layout metadata (dropdown options, slider bounds)
        .route("/meta", get(handlers::get_meta))
        // Chart slots
        .route("/charts/success-pie", get(handlers::success_pie_chart))
        .route("/charts/payload-scatter", get(handlers::payload_scatter_chart))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::dashboard_page))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(dataset)
}
