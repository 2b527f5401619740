//! Theme and styling definitions
//!
//! Centralized color and style definitions for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
pub struct Theme {
    // Header colors
    pub header_context: Color,
    pub header_namespace: Color,
    pub header_namespace_all: Color,

    // Status colors
    pub status_ready: Color,
    pub status_error: Color,
    pub status_unknown: Color,

    // Table colors
    pub table_header: Color,
    pub table_selected: Color,
    pub table_selected_bg: Color,
    pub table_normal: Color,

    // Text colors
    pub text_secondary: Color,
    pub text_label: Color,

    // Footer colors
    pub footer_key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_context: Color::Yellow,
            header_namespace: Color::Yellow,
            header_namespace_all: Color::Green,

            status_ready: Color::Green,
            status_error: Color::Red,
            status_unknown: Color::Yellow,

            table_header: Color::Cyan,
            table_selected: Color::Blue,
            table_selected_bg: Color::DarkGray,
            table_normal: Color::White,

            text_secondary: Color::Gray,
            text_label: Color::Cyan,

            footer_key: Color::Yellow,
        }
    }
}

impl Theme {
    pub fn header_context_style(&self) -> Style {
        Style::default()
            .fg(self.header_context)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_namespace_style(&self, is_all: bool) -> Style {
        Style::default()
            .fg(if is_all {
                self.header_namespace_all
            } else {
                self.header_namespace
            })
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_ready_style(&self) -> Style {
        Style::default().fg(self.status_ready)
    }

    pub fn status_error_style(&self) -> Style {
        Style::default().fg(self.status_error)
    }

    pub fn status_unknown_style(&self) -> Style {
        Style::default().fg(self.status_unknown)
    }

    pub fn table_selected_style(&self) -> Style {
        Style::default()
            .fg(self.table_selected)
            .bg(self.table_selected_bg)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }
}
