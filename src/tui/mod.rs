//! TUI module
//!
//! Terminal front-end for the dashboard, built with ratatui.

mod app;
mod theme;
pub mod views;

pub use app::App;
pub use theme::Theme;

use crate::api::CoreClient;
use crate::config::Config;
use crate::query::QueryClient;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

/// Run the TUI application
pub async fn run_tui(
    api: Arc<dyn CoreClient>,
    queries: Arc<QueryClient>,
    context: String,
    config: Config,
    initial_route: Option<String>,
) -> Result<()> {
    tracing::debug!("Initializing TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let default_namespace = if config.default_namespace.is_empty() {
        None
    } else {
        Some(config.default_namespace.clone())
    };
    let mut app = App::new(api, queries, context, default_namespace, Theme::default());
    if let Some(route) = &initial_route {
        app.navigate(route);
    }

    tracing::debug!("TUI initialized, entering main loop");

    loop {
        terminal.draw(|f| app.render(f))?;

        // Non-blocking input; the timeout doubles as the redraw tick so
        // query snapshots show up without an explicit wakeup
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key)
        {
            break;
        }
    }

    tracing::debug!("TUI shutting down");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if config.ui.enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    Ok(())
}
