//! Application state and core logic

use crate::config::Settings;
use crate::platform::has_action_modifier;
use crate::predictor::{PredictorClient, PredictorClientTrait};
use crate::state::{AppState, Focus};
use crate::submission::SubmissionController;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Endpoint shown in the status bar
    pub endpoint: String,
    /// Sends predictions and applies their outcomes
    controller: SubmissionController,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured prediction service
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = PredictorClient::new(settings)?;
        let endpoint = client.endpoint().to_string();
        Ok(Self::with_client(Arc::new(client), endpoint))
    }

    /// Create an App around any prediction client
    pub fn with_client(client: Arc<dyn PredictorClientTrait>, endpoint: String) -> Self {
        Self {
            state: AppState::default(),
            endpoint,
            controller: SubmissionController::new(client),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply any prediction outcomes that arrived since the last tick
    pub fn tick(&mut self) {
        self.controller.poll(&mut self.state.form);
    }

    /// Validate and send the form. Ignored while a request is in flight.
    pub fn submit(&mut self) {
        if self.controller.submit_in_background(&mut self.state.form) {
            tracing::info!("Prediction requested from {}", self.endpoint);
        }
    }

    /// Restore every field to its default and forget any pending request
    pub fn reset(&mut self) {
        self.state.form.reset();
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if has_action_modifier(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => self.reset(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Enter => match self.state.focus() {
                Focus::PredictButton => self.submit(),
                Focus::ResetButton => self.reset(),
                Focus::Field(_) => self.state.next_focus(),
            },
            KeyCode::Left => self.state.cycle_option(false),
            KeyCode::Right => self.state.cycle_option(true),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(' ') if self.focus_on_categorical() => self.state.cycle_option(true),
            KeyCode::Char(c) => self.state.input_char(c),
            _ => {}
        }
    }

    fn focus_on_categorical(&self) -> bool {
        self.state
            .focused_field()
            .is_some_and(|field| !field.is_numeric())
    }
}
