use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::predict::{Prediction, PredictionError, PredictionRequest};

pub const DEFAULT_ENDPOINT: &str =
    "https://adb-3879714843825281.1.azuredatabricks.net/serving-endpoints/salary15/invocations";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts prediction requests to a model serving endpoint. One attempt per request, no retry.
pub struct PredictionClient {
    endpoint: String,
    client: reqwest::Client
}

impl PredictionClient {
    /// # Errors
    /// Returns `PredictionError::Transport` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, PredictionError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PredictionError::Transport)?;

        Ok(Self {
            endpoint: endpoint.into(),
            client
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `request` as a JSON body and reads the salary from the JSON answer.
    ///
    /// # Errors
    /// Returns `PredictionError` if:
    /// - The request cannot be sent or times out.
    /// - The endpoint answers with a non-success status.
    /// - The answer is not JSON.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictionError> {
        debug!("Posting prediction request to [{}]", self.endpoint);

        let response = self.client.post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(PredictionError::Transport)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::status(status, body));
        }

        let body: Value = response.json().await.map_err(PredictionError::Decode)?;
        let prediction = Prediction::from_response(&body);

        info!("Prediction received from [{}]", self.endpoint);

        Ok(prediction)
    }
}
