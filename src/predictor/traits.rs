//! Trait abstraction for the prediction client to enable mocking in tests

use super::client::{PredictError, PredictionRequest};
use async_trait::async_trait;

/// Trait for prediction service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictorClientTrait: Send + Sync {
    /// Send the raw form values and return the unrounded predicted price
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictError>;
}
