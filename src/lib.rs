//! LaunchDash: an interactive dashboard server over historical
//! launch-outcome data.
//!
//! The dataset is loaded once at startup and held immutable; every chart is
//! a pure, stateless derivation over it. The HTTP layer is a thin hosting
//! shell: it serves the dashboard page and the JSON chart endpoints the page
//! refetches whenever a control changes.

pub mod api;
pub mod charts;
pub mod dataset;
pub mod models;
