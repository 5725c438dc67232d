use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error opening CSV at path: {} | {source}", path.display())]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("CSV header error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Request for [{url}] failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error
    },
    #[error("Request for [{url}] returned status {status}")]
    Status {
        url: String,
        status: StatusCode
    },
    #[error("CSV reader task did not finish: {0}")]
    Task(#[from] JoinError)
}

impl LoadError {
    pub fn open(path: PathBuf, source: io::Error) -> Self {
        Self::Open { path, source }
    }

    pub fn http(url: &str, source: reqwest::Error) -> Self {
        Self::Http { url: url.to_string(), source }
    }
}
