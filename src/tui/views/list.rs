//! List view rendering
//!
//! Tables for the automations and sources pages. Both keep the previous
//! rows on screen during a background reload and mark the title.

use crate::models::records::{Automation, SourceItem};
use crate::query::QueryResult;
use crate::tui::theme::Theme;
use crate::tui::views::helpers;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

fn list_title(base: &str, namespace: Option<&str>, refreshing: bool) -> String {
    let ns = namespace.unwrap_or("all");
    if refreshing {
        format!("{} ({}) [reloading]", base, ns)
    } else {
        format!("{} ({})", base, ns)
    }
}

pub fn render_automations(
    f: &mut Frame,
    area: Rect,
    snapshot: &QueryResult<Vec<Automation>>,
    namespace: Option<&str>,
    selected: usize,
    theme: &Theme,
) {
    let title = list_title("Automations", namespace, snapshot.is_fetching);

    if snapshot.is_loading {
        helpers::render_loading_state(f, area, &title, theme);
        return;
    }
    if let Some(error) = &snapshot.error {
        helpers::render_error_state(f, area, &title, &error.to_string(), theme);
        return;
    }

    let empty = Vec::new();
    let automations = snapshot.data.as_ref().unwrap_or(&empty);

    let header = Row::new(vec!["KIND", "NAMESPACE", "NAME", "READY", "MESSAGE"]).style(
        Style::default()
            .fg(theme.table_header)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = automations
        .iter()
        .enumerate()
        .map(|(idx, a)| {
            let style = if idx == selected {
                theme.table_selected_style()
            } else {
                Style::default().fg(theme.table_normal)
            };
            let ready_style = match a.ready {
                Some(true) => theme.status_ready_style(),
                Some(false) => theme.status_error_style(),
                None => theme.status_unknown_style(),
            };
            Row::new(vec![
                Cell::from(a.kind.clone()),
                Cell::from(a.namespace.clone()),
                Cell::from(a.name.clone()),
                Cell::from(helpers::format_ready(a.ready)).style(ready_style),
                Cell::from(helpers::truncate_message(
                    a.message.as_deref().unwrap_or("-"),
                    50,
                )),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(20),
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(helpers::create_themed_block(&title, theme));

    f.render_widget(table, area);
}

pub fn render_sources(
    f: &mut Frame,
    area: Rect,
    snapshot: &QueryResult<Vec<SourceItem>>,
    namespace: Option<&str>,
    selected: usize,
    theme: &Theme,
) {
    let title = list_title("Sources", namespace, snapshot.is_fetching);

    if snapshot.is_loading {
        helpers::render_loading_state(f, area, &title, theme);
        return;
    }
    if let Some(error) = &snapshot.error {
        helpers::render_error_state(f, area, &title, &error.to_string(), theme);
        return;
    }

    let empty = Vec::new();
    let sources = snapshot.data.as_ref().unwrap_or(&empty);

    let header = Row::new(vec!["KIND", "NAMESPACE", "NAME", "READY", "URL"]).style(
        Style::default()
            .fg(theme.table_header)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = sources
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let style = if idx == selected {
                theme.table_selected_style()
            } else {
                Style::default().fg(theme.table_normal)
            };
            let ready_style = match s.ready {
                Some(true) => theme.status_ready_style(),
                Some(false) => theme.status_error_style(),
                None => theme.status_unknown_style(),
            };
            Row::new(vec![
                Cell::from(s.kind.clone()),
                Cell::from(s.namespace.clone()),
                Cell::from(s.name.clone()),
                Cell::from(helpers::format_ready(s.ready)).style(ready_style),
                Cell::from(s.url.clone()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(20),
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Min(24),
        ],
    )
    .header(header)
    .block(helpers::create_themed_block(&title, theme));

    f.render_widget(table, area);
}
