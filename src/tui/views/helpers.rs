//! Common helper functions for view rendering

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Create a block with title and borders using theme
pub fn create_themed_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_label))
}

/// Render a loading state message
pub fn render_loading_state(f: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let block = create_themed_block(title, theme);
    let text = vec![Line::from("Loading..."), Line::from("")];
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(theme.text_secondary));
    f.render_widget(paragraph, area);
}

/// Render an error state message
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let block = create_themed_block(title, theme);
    let text = vec![
        Line::from("Error"),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("Press 'r' to retry"),
    ];
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(theme.status_error))
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Format a boolean readiness as a string
pub fn format_ready(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "True",
        Some(false) => "False",
        None => "?",
    }
}

/// Truncate a message to a maximum byte length, cutting on a char
/// boundary so multibyte messages never split mid-character.
pub fn truncate_message(message: &str, max_len: usize) -> String {
    if message.len() <= max_len {
        return message.to_string();
    }
    let mut end = max_len.saturating_sub(3);
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &message[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_message_short_passthrough() {
        assert_eq!(truncate_message("reconciled", 50), "reconciled");
    }

    #[test]
    fn test_truncate_message_long_ascii() {
        let message = "x".repeat(60);
        let truncated = truncate_message(&message, 50);
        assert_eq!(truncated.len(), 50);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_message_multibyte_boundary() {
        // Cut point lands inside the two-byte 'é'
        let message = format!("{}étendue au-delà de la limite", "a".repeat(46));
        let truncated = truncate_message(&message, 50);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated, format!("{}...", "a".repeat(46)));
    }

    #[test]
    fn test_format_ready() {
        assert_eq!(format_ready(Some(true)), "True");
        assert_eq!(format_ready(Some(false)), "False");
        assert_eq!(format_ready(None), "?");
    }
}
