//! In-memory store for the launch-records table.
//!
//! The table is read once at startup and never mutated afterwards, so
//! [`Dataset`] is a cheap clone over shared immutable data. It serves as the
//! router state for every request without any locking.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::LaunchRecord;

/// Columns the input table must carry. A header missing any of these is
/// schema drift and a fatal startup error.
const REQUIRED_COLUMNS: &[&str] = &[
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version",
];

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is missing required column {0:?}")]
    MissingColumn(&'static str),
    #[error("malformed dataset row: {0}")]
    Malformed(#[from] csv::Error),
}

/// The immutable launch-records table plus the two summaries the UI layout
/// needs: the distinct sites and the payload bounds. Both are computed once
/// at load time.
#[derive(Clone)]
pub struct Dataset {
    inner: Arc<Inner>,
}

struct Inner {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: (f64, f64),
}

impl Dataset {
    /// Load the table from a CSV file. Any failure here is fatal: the
    /// process must not start serving over a missing or malformed dataset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    /// Parse the table from any CSV source. Extra columns are tolerated;
    /// missing required columns are not.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let records = csv_reader
            .deserialize()
            .collect::<Result<Vec<LaunchRecord>, _>>()?;

        Ok(Self::from_records(records))
    }

    /// Build a store directly from records. Used by tests and by callers
    /// that already hold the table in memory.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.site) {
                sites.push(record.site.clone());
            }
        }

        let payload_bounds = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<(f64, f64)>, mass| match acc {
                None => Some((mass, mass)),
                Some((min, max)) => Some((min.min(mass), max.max(mass))),
            })
            .unwrap_or((0.0, 0.0));

        Self {
            inner: Arc::new(Inner {
                records,
                sites,
                payload_bounds,
            }),
        }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.inner.records
    }

    /// Distinct site names, in first-appearance order.
    pub fn sites(&self) -> &[String] {
        &self.inner.sites
    }

    /// Min and max of the payload column. (0, 0) for an empty table.
    pub fn payload_bounds(&self) -> (f64, f64) {
        self.inner.payload_bounds
    }

    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }
}
