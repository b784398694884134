//! Submission workflow: validate, send, await, apply
//!
//! A submission is split in two halves so the UI loop never blocks on the
//! network. [`SubmissionController::begin`] validates and moves the form to
//! `Submitting`; the request then runs on a tokio task and its outcome comes
//! back over a channel to be applied by [`SubmissionController::complete`].
//! Each submission is tagged with the form's generation, and outcomes whose
//! generation no longer matches (the form was reset or resubmitted) are
//! dropped.

use crate::predictor::{PredictError, PredictionRequest, PredictorClientTrait};
use crate::state::{validate, FormState, SubmissionStatus};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// Message shown for any failed request, whatever the cause
pub const REQUEST_FAILED_MESSAGE: &str =
    "Failed to predict price. Please check your connection and try again.";

/// A validated submission ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub request: PredictionRequest,
}

/// Result of a request, tagged with the submission it belongs to
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub generation: u64,
    pub result: Result<f64, PredictError>,
}

/// Drives form submissions against the prediction service
pub struct SubmissionController {
    client: Arc<dyn PredictorClientTrait>,
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcome_rx: UnboundedReceiver<SubmissionOutcome>,
}

impl SubmissionController {
    pub fn new(client: Arc<dyn PredictorClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            client,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Validate the form and, if valid, enter `Submitting`.
    ///
    /// Returns `None` when a submission is already in flight or validation
    /// failed (the form is then `Failed` with the validation message).
    pub fn begin(state: &mut FormState) -> Option<SubmissionTicket> {
        if state.is_submitting() {
            debug!("Submit ignored, request already in flight");
            return None;
        }

        state.begin_validation();
        if let Err(err) = validate(state.values()) {
            debug!("Validation failed: {err}");
            state.fail(err.to_string());
            return None;
        }

        let generation = state.begin_submission();
        debug!(generation, "Submitting prediction request");
        Some(SubmissionTicket {
            generation,
            request: PredictionRequest::from_values(state.values()),
        })
    }

    /// Apply a request outcome. Returns false if it was stale and dropped.
    pub fn complete(
        state: &mut FormState,
        generation: u64,
        result: Result<f64, PredictError>,
    ) -> bool {
        if generation != state.generation() || state.status() != SubmissionStatus::Submitting {
            debug!(
                generation,
                current = state.generation(),
                "Discarding stale prediction outcome"
            );
            return false;
        }

        match result {
            Ok(price) => {
                state.succeed(price);
                info!("Prediction received: {price}");
            }
            Err(err) => {
                warn!("Prediction error: {err}");
                state.fail(REQUEST_FAILED_MESSAGE);
            }
        }
        true
    }

    /// Run a whole submission, awaiting the response in place
    #[allow(dead_code)]
    pub async fn submit(&self, state: &mut FormState) {
        let Some(ticket) = Self::begin(state) else {
            return;
        };
        let result = self.client.predict(&ticket.request).await;
        Self::complete(state, ticket.generation, result);
    }

    /// Start a submission whose response is delivered to [`Self::poll`]
    pub fn submit_in_background(&self, state: &mut FormState) -> bool {
        let Some(ticket) = Self::begin(state) else {
            return false;
        };

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.predict(&ticket.request).await;
            // Receiver only goes away when the app shuts down
            let _ = tx.send(SubmissionOutcome {
                generation: ticket.generation,
                result,
            });
        });
        true
    }

    /// Apply every outcome that has arrived so far. Returns how many applied.
    pub fn poll(&mut self, state: &mut FormState) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if Self::complete(state, outcome.generation, outcome.result) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next outcome and apply it
    #[cfg(test)]
    pub async fn wait(&mut self, state: &mut FormState) -> bool {
        match self.outcome_rx.recv().await {
            Some(outcome) => Self::complete(state, outcome.generation, outcome.result),
            None => false,
        }
    }
}
