//! Display rows
//!
//! Detail pages render an ordered list of (label, value) pairs. Values
//! are composite renderables, not plain strings: a link, a formatted
//! timestamp, a humanized reconcile interval. The TUI decides styling;
//! `render` produces the plain-text form used everywhere else.

use chrono::{DateTime, Utc};
use std::fmt;

/// A renderable detail-page value.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    Text(String),
    /// A clickable URL; terminals that support OSC 8 get a real link.
    Link { href: String },
    Timestamp(Option<DateTime<Utc>>),
    /// A Flux reconcile interval such as "1m30s".
    Interval(Option<String>),
}

impl RowValue {
    pub fn text(value: impl Into<String>) -> Self {
        RowValue::Text(value.into())
    }

    pub fn link(href: impl Into<String>) -> Self {
        RowValue::Link { href: href.into() }
    }

    pub fn timestamp(time: Option<DateTime<Utc>>) -> Self {
        RowValue::Timestamp(time)
    }

    pub fn interval(interval: Option<String>) -> Self {
        RowValue::Interval(interval)
    }

    /// Plain-text rendering. Absent values render empty, never panic.
    pub fn render(&self) -> String {
        match self {
            RowValue::Text(s) => s.clone(),
            RowValue::Link { href } => href.clone(),
            RowValue::Timestamp(time) => format_timestamp(*time),
            RowValue::Interval(interval) => {
                interval.as_deref().map(format_interval).unwrap_or_default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.render().is_empty()
    }
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// One labelled row of a detail page. Ordering is significant and fixed
/// per resource kind.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: RowValue,
}

impl DisplayRow {
    pub fn new(label: &'static str, value: RowValue) -> Self {
        Self { label, value }
    }
}

/// Format an absolute timestamp for display.
pub fn format_timestamp(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => String::new(),
    }
}

/// Humanize a Flux duration string ("1h30m" -> "1 hour 30 minutes").
///
/// Unparseable input is shown as-is rather than hidden.
pub fn format_interval(interval: &str) -> String {
    let mut parts = Vec::new();
    let mut digits = String::new();

    for c in interval.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let Ok(amount) = digits.parse::<u64>() else {
            return interval.to_string();
        };
        digits.clear();
        let unit = match c {
            'h' => "hour",
            'm' => "minute",
            's' => "second",
            _ => return interval.to_string(),
        };
        if amount == 1 {
            parts.push(format!("1 {}", unit));
        } else {
            parts.push(format!("{} {}s", amount, unit));
        }
    }

    if !digits.is_empty() || parts.is_empty() {
        // Trailing digits without a unit, or nothing parsed at all
        return interval.to_string();
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let t = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(Some(t)), "2024-01-01 00:00:00 UTC");
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval("5m"), "5 minutes");
        assert_eq!(format_interval("1m30s"), "1 minute 30 seconds");
        assert_eq!(format_interval("2h"), "2 hours");
        assert_eq!(format_interval("1h1m1s"), "1 hour 1 minute 1 second");
    }

    #[test]
    fn test_format_interval_passthrough_on_garbage() {
        assert_eq!(format_interval("soon"), "soon");
        assert_eq!(format_interval("90"), "90");
        assert_eq!(format_interval(""), "");
    }

    #[test]
    fn test_row_value_rendering() {
        assert_eq!(RowValue::text("main").render(), "main");
        assert_eq!(
            RowValue::link("https://github.com/org/repo").render(),
            "https://github.com/org/repo"
        );
        assert_eq!(RowValue::interval(None).render(), "");
        assert!(RowValue::timestamp(None).is_empty());
    }
}
