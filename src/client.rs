//! Typed HTTP client for the calculator service.
//!
//! Used by the `calc-cli` binary and the integration tests.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::calc::Operation;

/// Errors returned by [`CalcClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with an `{"error": ...}` envelope.
    #[error("service error: {0}")]
    Api(String),

    /// The service answered with a status that carries no envelope.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Either side of the response envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Envelope {
    /// `None` when absent or when the result was not finite.
    #[serde(default)]
    pub result: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Health {
    pub status: String,
    pub version: String,
}

pub struct CalcClient {
    client: Client,
    base_url: String,
}

impl CalcClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the group route serving `operation`.
    pub fn operation_url(&self, operation: Operation) -> String {
        format!("{}/{}/{}", self.base_url, operation.group(), operation)
    }

    /// Evaluate via GET with query parameters.
    pub async fn calculate(&self, operation: Operation, num1: f64, num2: f64) -> Result<Option<f64>, ClientError> {
        let response = self
            .client
            .get(self.operation_url(operation))
            .query(&[("num1", num1.to_string()), ("num2", num2.to_string())])
            .send()
            .await?;
        Self::read_envelope(response).await
    }

    /// Evaluate via POST with a JSON body.
    pub async fn calculate_json(&self, operation: Operation, num1: f64, num2: f64) -> Result<Option<f64>, ClientError> {
        let response = self
            .client
            .post(self.operation_url(operation))
            .json(&json!({ "num1": num1, "num2": num2 }))
            .send()
            .await?;
        Self::read_envelope(response).await
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.client.get(format!("{}/health", self.base_url)).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn read_envelope(response: reqwest::Response) -> Result<Option<f64>, ClientError> {
        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::BAD_REQUEST {
            return Err(ClientError::Status(status));
        }

        let envelope: Envelope = response.json().await?;
        match envelope.error {
            Some(message) => Err(ClientError::Api(message)),
            None => Ok(envelope.result),
        }
    }
}
