//! Property form rendering: details, features, error line and actions

use super::field_renderer::field_line;
use crate::app::App;
use crate::state::{schema::FIELDS, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed by the form (sections, error line, buttons)
pub fn form_height() -> u16 {
    let features = FIELDS.iter().filter(|f| !f.is_numeric()).count() as u16;
    features + 2 + 1 + BUTTON_HEIGHT
}

/// Draw the whole property form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),                // Sections
            Constraint::Length(1),             // Error message
            Constraint::Length(BUTTON_HEIGHT), // Actions
        ])
        .split(area);

    draw_sections(frame, chunks[0], app);
    draw_error(frame, chunks[1], app);
    draw_actions(frame, chunks[2], app);
}

fn draw_sections(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let focus = app.state.focus();
    let mut details = Vec::new();
    let mut features = Vec::new();
    for (index, field) in FIELDS.iter().enumerate() {
        let value = app.state.form.value(field.name).unwrap_or_default();
        let line = field_line(field, value, focus == Focus::Field(index));
        if field.is_numeric() {
            details.push(line);
        } else {
            features.push(line);
        }
    }

    let details_active = matches!(app.state.focused_field(), Some(f) if f.is_numeric());
    let features_active = matches!(app.state.focused_field(), Some(f) if !f.is_numeric());

    frame.render_widget(
        Paragraph::new(details).block(section_block(" Property Details ", details_active)),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(features).block(section_block(" Property Features ", features_active)),
        columns[1],
    );
}

fn section_block(title: &str, is_active: bool) -> Block<'_> {
    let border_color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn draw_error(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = app.state.form.error_message() {
        let line = Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(Color::Yellow)),
            Span::styled(message, Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(18),
            Constraint::Length(2),
            Constraint::Length(22),
        ])
        .split(area);

    let submitting = app.state.form.is_submitting();
    let focus = app.state.focus();
    let predict_label = if submitting {
        "Predicting..."
    } else {
        "Predict Price"
    };

    render_button(
        frame,
        buttons[1],
        "Reset Form",
        focus == Focus::ResetButton,
        true,
    );
    render_button(
        frame,
        buttons[3],
        predict_label,
        focus == Focus::PredictButton,
        !submitting,
    );
}
