// src/services/inference.rs
use serde_json::Value;

use crate::error::AppError;
use crate::message::CompletionRequest;

/// Client for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    url: String,
}

impl InferenceClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// POST the payload and decode the response body as JSON.
    ///
    /// The backend's status code is not inspected: whatever JSON comes back is
    /// returned as-is.
    pub async fn complete(&self, payload: &CompletionRequest) -> Result<Value, AppError> {
        let response = self.http.post(&self.url).json(payload).send().await?;
        tracing::debug!(status = %response.status(), "inference backend responded");

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
