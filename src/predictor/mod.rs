//! Prediction service client module

mod client;
mod traits;

pub use client::{PredictError, PredictionRequest, PredictorClient};
pub use traits::PredictorClientTrait;

#[cfg(test)]
pub use traits::MockPredictorClientTrait;
