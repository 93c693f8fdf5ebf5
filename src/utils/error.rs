// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::storage::SourceKind;

// Errors raised while talking to the upstream trackers
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid tracker URL: {0}")]
    Url(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{kind} source document is missing: {}", .path.display())]
    MissingInput { kind: SourceKind, path: PathBuf },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Tracker interaction failed: {0}")]
    Tracker(#[from] TrackerError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
