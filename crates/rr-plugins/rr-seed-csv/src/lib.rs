//! # rr-seed-csv
//!
//! Reads the startup dataset: a CSV file with a header row containing
//! `ReviewId`, `Location`, `Timestamp` and `ReviewBody`. Column order does
//! not matter and extra columns are ignored. Timestamps are normalized
//! to `NaiveDateTime` here, so the store never holds raw strings.

use std::io::Read;
use std::path::{Path, PathBuf};

use rr_core::models::Review;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to open seed file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row that could not be read or normalized. `line` is 1-based and
    /// counts the header.
    #[error("invalid seed row at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Loads every row of the CSV file at `path`.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Review>, SeedError> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path).map_err(|source| SeedError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reviews = read_reviews(reader)?;
    tracing::info!(path = %path.display(), count = reviews.len(), "seed file loaded");
    Ok(reviews)
}

/// Loads rows from any reader, e.g. an embedded dataset.
pub fn load_reader<R: Read>(input: R) -> Result<Vec<Review>, SeedError> {
    read_reviews(csv::Reader::from_reader(input))
}

fn read_reviews<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Review>, SeedError> {
    reader
        .deserialize::<Review>()
        .map(|row| {
            row.map_err(|source| SeedError::Row {
                line: source.position().map(|p| p.line()).unwrap_or_default(),
                source,
            })
        })
        .collect()
}
