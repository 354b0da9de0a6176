use serde::{Deserialize, Serialize};

/// A single historical launch, as it appears in the input table.
///
/// Field names map to the upstream CSV headers via serde renames, so the
/// loader can deserialize rows directly. Records never change after load;
/// every chart is a fresh computation over the same immutable set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Booster Version")]
    pub booster_version: String,
}

/// Binary launch result. Serializes as the upstream `class` column: 0 for
/// failure, 1 for success.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// The numeric category label used in single-site pie charts.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Failure => "0",
            Self::Success => "1",
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        match outcome {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Failure),
            1 => Ok(Self::Success),
            other => Err(format!("invalid outcome class: {other}")),
        }
    }
}

/// The dropdown's site selection: the `ALL` sentinel or one known site.
///
/// Held by the UI runtime, not by the core — it arrives with every chart
/// request and is discarded after the chart is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteFilter {
    All,
    Site(String),
}

/// Wire value the dropdown sends for the all-sites selection.
pub const ALL_SITES: &str = "ALL";

impl SiteFilter {
    /// Whether a record at `site` passes this filter.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(name) => name == site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(name) => name,
        }
    }
}

impl Default for SiteFilter {
    fn default() -> Self {
        Self::All
    }
}

impl From<String> for SiteFilter {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<SiteFilter> for String {
    fn from(filter: SiteFilter) -> String {
        filter.as_str().to_string()
    }
}
