use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Prediction request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Prediction endpoint returned status {status}: {body}")]
    Status {
        status: StatusCode,
        body: String
    },
    #[error("Prediction response is not JSON: {0}")]
    Decode(#[source] reqwest::Error)
}

impl PredictionError {
    pub fn status(status: StatusCode, body: String) -> Self {
        Self::Status { status, body }
    }
}
