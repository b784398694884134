//! Application state definitions

use super::forms::schema::{self, FieldSpec, FIELDS};
use super::forms::FormState;

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Index into the schema field list
    Field(usize),
    ResetButton,
    PredictButton,
}

/// Whole-app state handed to the renderer
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The property form and its submission status
    pub form: FormState,
    /// Focus position: schema fields first, then the two buttons
    pub focus_index: usize,
}

impl AppState {
    /// Fields plus the Reset and Predict buttons
    pub fn focus_count() -> usize {
        schema::field_count() + 2
    }

    pub fn focus(&self) -> Focus {
        let fields = schema::field_count();
        match self.focus_index {
            i if i < fields => Focus::Field(i),
            i if i == fields => Focus::ResetButton,
            _ => Focus::PredictButton,
        }
    }

    #[cfg(test)]
    pub fn set_focus(&mut self, index: usize) {
        self.focus_index = index.min(Self::focus_count() - 1);
    }

    pub fn next_focus(&mut self) {
        self.focus_index = (self.focus_index + 1) % Self::focus_count();
    }

    pub fn prev_focus(&mut self) {
        if self.focus_index == 0 {
            self.focus_index = Self::focus_count() - 1;
        } else {
            self.focus_index -= 1;
        }
    }

    /// Schema entry of the focused field, if focus is on a field
    pub fn focused_field(&self) -> Option<&'static FieldSpec> {
        match self.focus() {
            Focus::Field(i) => FIELDS.get(i),
            _ => None,
        }
    }

    /// Append a typed character to the focused numeric field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focused_field().filter(|f| f.is_numeric()) else {
            return;
        };
        let mut value = self.form.value(field.name).unwrap_or_default().to_string();
        value.push(c);
        self.update_field(field.name, value);
    }

    /// Remove the last character of the focused numeric field
    pub fn backspace(&mut self) {
        let Some(field) = self.focused_field().filter(|f| f.is_numeric()) else {
            return;
        };
        let mut value = self.form.value(field.name).unwrap_or_default().to_string();
        if value.pop().is_some() {
            self.update_field(field.name, value);
        }
    }

    /// Select the next (or previous) option of the focused categorical field
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.focused_field().filter(|f| !f.is_numeric()) else {
            return;
        };
        let options = field.options();
        let current = self.form.value(field.name).unwrap_or_default();
        let len = options.len();
        let next = match options.iter().position(|o| o.value == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.update_field(field.name, options[next].value.to_string());
    }

    fn update_field(&mut self, name: &str, value: String) {
        if let Err(err) = self.form.set_field(name, value) {
            tracing::warn!("Ignoring edit: {err}");
        }
    }
}
