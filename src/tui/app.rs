//! Application state
//!
//! Holds the current page and translates key presses into navigation.
//! All navigation goes through route strings so detail pages always
//! pass parameter resolution, even when opened from a list row.

use crate::api::CoreClient;
use crate::models::{ResourceIdentity, ResourceKind};
use crate::pages::{
    extractor_for, resolve_detail_params, AutomationsPage, DetailPage, Route, SourcesPage,
};
use crate::query::QueryClient;
use crate::tui::theme::Theme;
use crate::tui::views;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::sync::Arc;

enum Page {
    Automations(AutomationsPage),
    Sources(SourcesPage),
    Detail { page: DetailPage, back: Route },
    NotFound(String),
}

pub struct App {
    api: Arc<dyn CoreClient>,
    queries: Arc<QueryClient>,
    context: String,
    default_namespace: Option<String>,
    theme: Theme,
    page: Page,
    selected: usize,
}

impl App {
    pub fn new(
        api: Arc<dyn CoreClient>,
        queries: Arc<QueryClient>,
        context: String,
        default_namespace: Option<String>,
        theme: Theme,
    ) -> Self {
        let page = Page::Automations(AutomationsPage::new(api.clone(), default_namespace.clone()));
        Self {
            api,
            queries,
            context,
            default_namespace,
            theme,
            page,
            selected: 0,
        }
    }

    /// Navigate by route string, detail query string included.
    pub fn navigate(&mut self, path: &str) {
        let route = Route::parse(path);
        let query = path.split_once('?').map(|(_, q)| q).unwrap_or("");

        self.selected = 0;
        if let Some(kind) = route.detail_kind() {
            let params = resolve_detail_params(query);
            let identity = ResourceIdentity {
                name: params.name.unwrap_or_default(),
                namespace: self.default_namespace.clone().unwrap_or_default(),
                cluster_name: params.cluster_name.unwrap_or_else(|| self.context.clone()),
            };
            self.open_detail(kind, identity, Route::list_for_kind(kind));
            return;
        }
        match route {
            Route::Sources => {
                self.page = Page::Sources(SourcesPage::new(
                    self.api.clone(),
                    self.default_namespace.clone(),
                ));
            }
            // The runtime view is recognized but not implemented yet;
            // it lands on the stub page instead of silently redirecting.
            Route::FluxRuntime | Route::NotFound => {
                self.page = Page::NotFound(path.to_string());
            }
            _ => {
                self.page = Page::Automations(AutomationsPage::new(
                    self.api.clone(),
                    self.default_namespace.clone(),
                ));
            }
        }
    }

    fn open_detail(&mut self, kind: ResourceKind, identity: ResourceIdentity, back: Route) {
        if let Some(extractor) = extractor_for(kind) {
            self.page = Page::Detail {
                page: DetailPage::new(self.queries.clone(), kind, identity, extractor),
                back,
            };
        } else {
            self.page = Page::NotFound(Route::for_kind(kind).path().to_string());
        }
    }

    fn open_selected_row(&mut self) {
        let target = match &self.page {
            Page::Automations(page) => page
                .snapshot()
                .data
                .as_ref()
                .and_then(|rows| rows.get(self.selected))
                .and_then(|a| {
                    ResourceKind::parse_optional(&a.kind).map(|kind| {
                        (
                            kind,
                            ResourceIdentity {
                                name: a.name.clone(),
                                namespace: a.namespace.clone(),
                                cluster_name: a.cluster_name.clone(),
                            },
                            Route::Automations,
                        )
                    })
                }),
            Page::Sources(page) => page
                .snapshot()
                .data
                .as_ref()
                .and_then(|rows| rows.get(self.selected))
                .and_then(|s| {
                    ResourceKind::parse_optional(&s.kind).map(|kind| {
                        (
                            kind,
                            ResourceIdentity {
                                name: s.name.clone(),
                                namespace: s.namespace.clone(),
                                cluster_name: s.cluster_name.clone(),
                            },
                            Route::Sources,
                        )
                    })
                }),
            _ => None,
        };
        if let Some((kind, identity, back)) = target {
            self.open_detail(kind, identity, back);
        }
    }

    fn row_count(&self) -> usize {
        match &self.page {
            Page::Automations(page) => page.snapshot().data.map(|d| d.len()).unwrap_or(0),
            Page::Sources(page) => page.snapshot().data.map(|d| d.len()).unwrap_or(0),
            _ => 0,
        }
    }

    /// Advance the namespace filter through: all, then each namespace.
    fn cycle_namespace(&mut self) {
        if let Page::Automations(page) = &mut self.page {
            let namespaces = page.namespaces();
            if namespaces.is_empty() {
                return;
            }
            let next = match page.namespace() {
                None => Some(namespaces[0].clone()),
                Some(current) => namespaces
                    .iter()
                    .position(|ns| ns == current)
                    .and_then(|idx| namespaces.get(idx + 1))
                    .cloned(),
            };
            self.selected = 0;
            page.set_namespace(next);
        }
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('a') => self.navigate(Route::Automations.path()),
            KeyCode::Char('s') => self.navigate(Route::Sources.path()),
            KeyCode::Char('n') => self.cycle_namespace(),
            KeyCode::Char('r') => match &mut self.page {
                Page::Automations(page) => page.refresh(),
                Page::Sources(page) => page.refresh(),
                Page::Detail { page, .. } => page.refresh(),
                Page::NotFound(_) => {}
            },
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.row_count();
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter => self.open_selected_row(),
            KeyCode::Esc => {
                if let Page::Detail { back, .. } = &self.page {
                    let back = *back;
                    self.navigate(back.path());
                }
            }
            _ => {}
        }
        false
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);

        match &self.page {
            Page::Automations(page) => views::render_automations(
                f,
                chunks[1],
                &page.snapshot(),
                page.namespace(),
                self.selected,
                &self.theme,
            ),
            Page::Sources(page) => views::render_sources(
                f,
                chunks[1],
                &page.snapshot(),
                page.namespace(),
                self.selected,
                &self.theme,
            ),
            Page::Detail { page, .. } => views::render_detail(f, chunks[1], page, &self.theme),
            Page::NotFound(path) => {
                let block =
                    views::helpers::create_themed_block("Not Found", &self.theme);
                let paragraph = Paragraph::new(vec![
                    Line::from(format!("No page matches {}", path)),
                    Line::from(""),
                    Line::from("Press 'a' for automations or 's' for sources"),
                ])
                .block(block);
                f.render_widget(paragraph, chunks[1]);
            }
        }

        self.render_footer(f, chunks[2]);
    }

    fn render_header(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let namespace = match &self.page {
            Page::Automations(page) => page.namespace().map(str::to_string),
            Page::Sources(page) => page.namespace().map(str::to_string),
            _ => None,
        };
        let is_all = namespace.is_none();
        let line = Line::from(vec![
            Span::styled(
                format!(" context: {} ", self.context),
                self.theme.header_context_style(),
            ),
            Span::styled(
                format!(" namespace: {} ", namespace.as_deref().unwrap_or("all")),
                self.theme.header_namespace_style(is_all),
            ),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn render_footer(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let keys: &[(&str, &str)] = match &self.page {
            Page::Detail { .. } => &[("r", "refresh"), ("esc", "back"), ("q", "quit")],
            Page::NotFound(_) => &[("a", "automations"), ("s", "sources"), ("q", "quit")],
            _ => &[
                ("j/k", "move"),
                ("enter", "open"),
                ("n", "namespace"),
                ("r", "refresh"),
                ("a", "automations"),
                ("s", "sources"),
                ("q", "quit"),
            ],
        };
        let mut spans = Vec::new();
        for (key, action) in keys {
            spans.push(Span::styled(
                format!(" <{}> ", key),
                self.theme.footer_key_style(),
            ));
            spans.push(Span::raw(*action));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
