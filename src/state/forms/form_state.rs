//! Form state container and its transitions

use super::schema::default_values;
use thiserror::Error;

/// Errors raised by form mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Validating => "Validating",
            Self::Submitting => "Predicting...",
            Self::Succeeded => "Done",
            Self::Failed => "Failed",
        }
    }
}

/// Raw text of every schema field, kept in schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    entries: Vec<(&'static str, String)>,
}

impl FieldValues {
    /// Values initialized to the schema defaults
    pub fn defaults() -> Self {
        Self {
            entries: default_values(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the value of a known field. Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Round a price to two decimal places. Values too large to scale are
/// returned unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

/// Current values and submission status of the property form.
///
/// `error_message` is only set while `Failed` and `predicted_price` only
/// while `Succeeded`. `generation` advances on every submission and reset;
/// request outcomes carrying an older generation are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    values: FieldValues,
    status: SubmissionStatus,
    error_message: Option<String>,
    predicted_price: Option<f64>,
    generation: u64,
}

impl FormState {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a field's raw value. Clears any error message.
    pub fn set_field(&mut self, name: &str, raw: impl Into<String>) -> Result<(), FormError> {
        if !self.values.set(name, raw.into()) {
            return Err(FormError::UnknownField(name.to_string()));
        }
        if self.error_message.take().is_some() && self.status == SubmissionStatus::Failed {
            self.status = SubmissionStatus::Idle;
        }
        Ok(())
    }

    /// Restore schema defaults and drop any result, error or pending request
    pub fn reset(&mut self) {
        self.values = FieldValues::defaults();
        self.error_message = None;
        self.predicted_price = None;
        self.status = SubmissionStatus::Idle;
        self.generation += 1;
        tracing::debug!(generation = self.generation, "Form reset");
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[allow(dead_code)]
    pub fn predicted_price(&self) -> Option<f64> {
        self.predicted_price
    }

    /// Predicted price with exactly two decimals, e.g. "4500000.46"
    pub fn formatted_price(&self) -> Option<String> {
        self.predicted_price.map(|p| format!("{p:.2}"))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // Transitions below are driven by the submission controller.

    pub(crate) fn begin_validation(&mut self) {
        self.status = SubmissionStatus::Validating;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Failed;
        self.error_message = Some(message.into());
        self.predicted_price = None;
    }

    /// Enter `Submitting` and return the generation of the new request
    pub(crate) fn begin_submission(&mut self) -> u64 {
        self.status = SubmissionStatus::Submitting;
        self.error_message = None;
        self.predicted_price = None;
        self.generation += 1;
        self.generation
    }

    pub(crate) fn succeed(&mut self, price: f64) {
        self.status = SubmissionStatus::Succeeded;
        self.error_message = None;
        self.predicted_price = Some(round_to_cents(price));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::schema;

    mod field_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_defaults_match_schema() {
            let values = FieldValues::defaults();
            let names: Vec<_> = values.iter().map(|(n, _)| n).collect();
            let schema_names: Vec<_> = schema::all_field_names().collect();
            assert_eq!(names, schema_names);
            assert_eq!(values.get("mainroad"), Some("yes"));
            assert_eq!(values.get("area"), Some(""));
        }

        #[test]
        fn test_set_unknown_field_is_rejected() {
            let mut values = FieldValues::defaults();
            assert!(!values.set("garage", "2".to_string()));
            assert_eq!(values.len(), 12);
            assert!(values.get("garage").is_none());
        }

        #[test]
        fn test_set_keeps_order() {
            let mut values = FieldValues::defaults();
            assert!(values.set("parking", "1".to_string()));
            let (name, value) = values.iter().nth(9).unwrap();
            assert_eq!((name, value), ("parking", "1"));
        }
    }

    mod set_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_replaces_value() {
            let mut state = FormState::new();
            state.set_field("area", "7420").unwrap();
            assert_eq!(state.value("area"), Some("7420"));
        }

        #[test]
        fn test_unknown_field_leaves_state_untouched() {
            let mut state = FormState::new();
            let before = state.clone();
            let err = state.set_field("garage", "1").unwrap_err();
            assert_eq!(err, FormError::UnknownField("garage".to_string()));
            assert_eq!(state, before);
        }

        #[test]
        fn test_clears_error_and_leaves_failed() {
            let mut state = FormState::new();
            state.fail("Please fill in: area");

            state.set_field("area", "1").unwrap();
            assert!(state.error_message().is_none());
            assert!(state.predicted_price().is_none());
            assert_eq!(state.status(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_keeps_prediction() {
            let mut state = FormState::new();
            state.begin_submission();
            state.succeed(100.0);

            state.set_field("bedrooms", "3").unwrap();
            assert_eq!(state.predicted_price(), Some(100.0));
            assert_eq!(state.status(), SubmissionStatus::Succeeded);
        }

        #[test]
        fn test_edit_during_submission_keeps_generation() {
            let mut state = FormState::new();
            let generation = state.begin_submission();

            state.set_field("area", "50").unwrap();
            assert!(state.is_submitting());
            assert_eq!(state.generation(), generation);
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_restores_defaults_from_any_state() {
            let mut state = FormState::new();
            state.set_field("area", "900").unwrap();
            state.set_field("furnishingstatus", "furnished").unwrap();
            state.fail("boom");

            state.reset();
            assert_eq!(state.values(), &FieldValues::defaults());
            assert_eq!(state.status(), SubmissionStatus::Idle);
            assert!(state.error_message().is_none());
            assert!(state.predicted_price().is_none());
        }

        #[test]
        fn test_clears_prediction() {
            let mut state = FormState::new();
            state.begin_submission();
            state.succeed(12.0);

            state.reset();
            assert!(state.predicted_price().is_none());
            assert!(state.formatted_price().is_none());
        }

        #[test]
        fn test_reset_twice_matches_reset_once() {
            let mut once = FormState::new();
            once.set_field("stories", "2").unwrap();
            once.reset();

            let mut twice = once.clone();
            twice.reset();

            assert_eq!(once.values(), twice.values());
            assert_eq!(once.status(), twice.status());
            assert_eq!(once.error_message(), twice.error_message());
            assert_eq!(once.predicted_price(), twice.predicted_price());
        }

        #[test]
        fn test_advances_generation() {
            let mut state = FormState::new();
            let generation = state.begin_submission();
            state.reset();
            assert!(state.generation() > generation);
            assert!(!state.is_submitting());
        }
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_succeed_rounds_to_cents() {
            let mut state = FormState::new();
            state.begin_submission();
            state.succeed(4_500_000.456);
            assert_eq!(state.formatted_price().as_deref(), Some("4500000.46"));
            assert_eq!(state.status(), SubmissionStatus::Succeeded);
        }

        #[test]
        fn test_fail_drops_prediction() {
            let mut state = FormState::new();
            state.begin_submission();
            state.succeed(1.0);
            state.fail("nope");
            assert!(state.predicted_price().is_none());
            assert_eq!(state.error_message(), Some("nope"));
        }

        #[test]
        fn test_begin_submission_clears_error() {
            let mut state = FormState::new();
            state.fail("old");
            state.begin_submission();
            assert!(state.error_message().is_none());
            assert!(state.is_submitting());
        }

        #[test]
        fn test_status_labels() {
            assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
            assert_eq!(SubmissionStatus::Submitting.label(), "Predicting...");
        }

        #[test]
        fn test_round_to_cents() {
            assert_eq!(round_to_cents(1.005_1), 1.01);
            assert_eq!(round_to_cents(2.0), 2.0);
            assert_eq!(round_to_cents(0.004), 0.0);
        }

        #[test]
        fn test_huge_price_stays_finite() {
            assert_eq!(round_to_cents(1e307), 1e307);
            assert_eq!(round_to_cents(f64::MAX), f64::MAX);

            let mut state = FormState::new();
            state.begin_submission();
            state.succeed(1e307);
            let formatted = state.formatted_price().unwrap();
            assert!(!formatted.contains("inf"));
            assert!(formatted.ends_with(".00"));
            assert!(formatted.len() > 300);
            assert_eq!(state.predicted_price(), Some(1e307));
        }
    }
}
