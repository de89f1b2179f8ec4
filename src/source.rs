//! Roster loading: bounded read and JSON decode.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::PersonRecord;

/// Failures while obtaining the input roster. All of them are fatal and
/// abort the run before anything is printed.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("roster not found: {0}")]
    NotFound(PathBuf),

    #[error("cannot read roster {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("roster {path} is {size} bytes, limit is {limit}")]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("cannot decode roster {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid roster {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Result type for roster loading.
pub type SourceResult<T> = Result<T, SourceError>;

/// Read and decode a roster file, keeping record order.
///
/// The size bound is checked against file metadata before reading, so an
/// oversized roster never occupies memory. Every record must carry a
/// non-empty name; names are the keys manager references resolve against.
#[instrument(level = "debug")]
pub fn load_roster(path: &Path, max_bytes: u64) -> SourceResult<Vec<PersonRecord>> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    if metadata.len() > max_bytes {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: max_bytes,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| SourceError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let records: Vec<PersonRecord> =
        serde_json::from_str(&content).map_err(|e| SourceError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

    for (i, record) in records.iter().enumerate() {
        if record.name.is_empty() {
            return Err(SourceError::Invalid {
                path: path.to_path_buf(),
                reason: format!("record {} has an empty name", i),
            });
        }
    }

    debug!("decoded {} records from {}", records.len(), path.display());
    Ok(records)
}
