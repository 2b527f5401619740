//! Resource detail view rendering
//!
//! Renders the three states of a detail page: loading, error, or the
//! ordered label/value rows the extractor produced. Empty values still
//! get their row so every page of a kind looks the same.

use crate::pages::{DetailPage, DetailState, RowValue};
use crate::tui::theme::Theme;
use crate::tui::views::helpers;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render_detail(f: &mut Frame, area: Rect, page: &DetailPage, theme: &Theme) {
    let title = format!("{} - {}", page.kind(), page.title());

    match page.state() {
        DetailState::Loading => {
            helpers::render_loading_state(f, area, &title, theme);
        }
        DetailState::Error(error) => {
            helpers::render_error_state(f, area, &title, &error.to_string(), theme);
        }
        DetailState::Loaded { rows, refreshing } => {
            let mut lines = Vec::with_capacity(rows.len() + 2);
            if refreshing {
                lines.push(Line::from(Span::styled(
                    "Refreshing...",
                    Style::default().fg(theme.text_secondary),
                )));
                lines.push(Line::from(""));
            }
            for row in &rows {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", row.label),
                        Style::default().fg(theme.text_label),
                    ),
                    render_value(&row.value, theme),
                ]));
            }

            let block = helpers::create_themed_block(&title, theme);
            let paragraph = Paragraph::new(lines)
                .block(block)
                .wrap(ratatui::widgets::Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
    }
}

fn render_value<'a>(value: &'a RowValue, theme: &Theme) -> Span<'a> {
    match value {
        RowValue::Link { href } => Span::styled(
            href.clone(),
            Style::default().fg(theme.table_header),
        ),
        other => Span::raw(other.render()),
    }
}
