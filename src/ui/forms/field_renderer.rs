//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldSpec};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width reserved for field labels so values line up
pub const LABEL_WIDTH: usize = 18;

/// Build the single-line representation of a field
pub fn field_line(field: &FieldSpec, value: &str, is_active: bool) -> Line<'static> {
    let label_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let marker = if is_active { "▸ " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{:<width$}", field.label, width = LABEL_WIDTH),
            label_style,
        ),
    ];

    match field.kind {
        FieldKind::Numeric { placeholder } => {
            if value.is_empty() && !is_active {
                spans.push(Span::styled(
                    placeholder,
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::raw(value.to_string()));
            }
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
        }
        FieldKind::Categorical { .. } => {
            let label = field.option_label(value).unwrap_or(value).to_string();
            if is_active {
                spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(label, Style::default().fg(Color::White)));
                spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
            } else {
                spans.push(Span::raw(label));
            }
        }
    }

    Line::from(spans)
}

/// Draw help text line
pub fn help_line(items: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, desc) in items {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {desc}  ")));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::schema::spec;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_numeric_shows_placeholder() {
        let line = field_line(spec("area").unwrap(), "", false);
        assert!(text_of(&line).contains("Enter area in square feet"));
    }

    #[test]
    fn test_active_numeric_shows_value_and_cursor() {
        let line = field_line(spec("area").unwrap(), "7420", true);
        let text = text_of(&line);
        assert!(text.contains("7420▌"));
        assert!(!text.contains("Enter area"));
    }

    #[test]
    fn test_categorical_shows_option_label() {
        let line = field_line(spec("mainroad").unwrap(), "yes", false);
        assert!(text_of(&line).contains("Yes - On Main Road"));
    }

    #[test]
    fn test_unknown_categorical_value_shown_raw() {
        let line = field_line(spec("basement").unwrap(), "maybe", true);
        assert!(text_of(&line).contains("◀ maybe ▶"));
    }

    #[test]
    fn test_help_line() {
        let line = help_line(&[("Tab", "next"), ("Esc", "quit")]);
        assert_eq!(text_of(&line), "Tab: next  Esc: quit  ");
    }
}
