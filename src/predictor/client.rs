//! HTTP client for the price prediction service
//!
//! Posts the raw form values as a flat JSON object and reads
//! `predicted_price` from the response.

use super::traits::PredictorClientTrait;
use crate::config::Settings;
use crate::state::FieldValues;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

/// Ways a prediction request can fail
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("request to prediction service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction service returned {0}")]
    Status(StatusCode),
    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),
}

/// Request body: every schema field with its raw, unparsed text, in
/// schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    fields: Vec<(&'static str, String)>,
}

impl PredictionRequest {
    pub fn from_values(values: &FieldValues) -> Self {
        Self {
            fields: values
                .iter()
                .map(|(name, value)| (name, value.to_string()))
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl Serialize for PredictionRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    predicted_price: f64,
}

/// Client for the prediction endpoint
pub struct PredictorClient {
    client: Client,
    endpoint: String,
}

impl PredictorClient {
    /// Create a new client for the configured endpoint
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictorClientTrait for PredictorClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status));
        }

        let body = response.text().await?;
        let parsed: PredictionResponse = serde_json::from_str(&body)
            .map_err(|e| PredictError::MalformedResponse(e.to_string()))?;

        Ok(parsed.predicted_price)
    }
}
