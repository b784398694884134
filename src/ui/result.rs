//! Prediction result card

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Currency sign shown before the price
const CURRENCY: &str = "₹";

const DISCLAIMER: &str = "*This is an estimated price based on the provided property details";

/// Height of the result card including borders
pub const RESULT_HEIGHT: u16 = 5;

/// Draw the predicted price, or a hint while there is none
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(price) = app.state.form.formatted_price() else {
        let hint = if app.state.form.is_submitting() {
            "Waiting for the prediction service..."
        } else {
            "Fill in the property details and choose Predict Price"
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{CURRENCY} "), Style::default().fg(Color::Green)),
            Span::styled(
                price,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(DISCLAIMER, Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Predicted Price ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(paragraph, area);
}
