//! Domain models for LaunchDash.
//!
//! # Core Concepts
//!
//! - [`LaunchRecord`]: one historical launch, read from the input CSV at
//!   startup. The full record set is immutable for the life of the process.
//! - [`SiteFilter`]: the dropdown's selection — either the `ALL` sentinel or
//!   one known launch site.
//! - [`ChartDescription`]: a declarative, renderer-agnostic chart value.
//!   The server derives these; an external renderer draws them. They carry
//!   data and labels only, no behavior.

mod chart;
mod record;

pub use chart::*;
pub use record::*;
