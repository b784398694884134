//! Layout components (header, body, status bar)

use super::forms::{form_height, help_line};
use super::result::RESULT_HEIGHT;
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::SubmissionStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the main screen
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub result: Rect,
    pub status_bar: Rect,
}

/// Split the screen into header, form, result card and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Header
            Constraint::Min(form_height()),    // Form
            Constraint::Length(RESULT_HEIGHT), // Result
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        form: chunks[1],
        result: chunks[2],
        status_bar: chunks[3],
    }
}

/// Draw the title and subtitle
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " House Price Predictor",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Get instant price predictions for your property",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.state.form.status();
    let status_color = match status {
        SubmissionStatus::Idle | SubmissionStatus::Validating => Color::Gray,
        SubmissionStatus::Submitting => Color::Yellow,
        SubmissionStatus::Succeeded => Color::Green,
        SubmissionStatus::Failed => Color::Red,
    };

    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(status_color)),
        Span::styled(status.label(), Style::default().fg(status_color)),
        Span::raw(" | "),
    ];
    spans.extend(
        help_line(&[
            ("Tab", "next"),
            ("←/→", "option"),
            (SUBMIT_SHORTCUT, "predict"),
            (RESET_SHORTCUT, "reset"),
            ("Esc", "quit"),
        ])
        .spans,
    );
    spans.push(Span::styled(app.endpoint.clone(), Style::default().fg(Color::Blue)));

    let status_bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(status_bar, area);
}
