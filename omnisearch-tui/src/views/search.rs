//! Search bar and result panel.
//!
//! The panel is described row by row ([`PanelRow`]) so that drawing and
//! click hit-testing agree on what sits on each terminal line.

use crate::state::App;
use crate::store::SearchStatus;
use crate::theme::{entity_color, stock_badge_color};
use crate::views::{screen_layout, ScreenLayout};
use crate::widgets::{highlighted_spans, FilterBar, FilterOption};
use omnisearch_core::{result_sections, EntityKind, ItemDisplay};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq)]
pub enum PanelRow {
    Filters,
    Header { kind: EntityKind, total: usize },
    /// `index` counts items across every visible section.
    Item { index: usize, item: ItemDisplay },
    Suggestion { index: usize, query: String },
    Message(String),
}

/// Rows of the overlay below the search bar; empty when it is closed.
pub fn panel_rows(app: &App) -> Vec<PanelRow> {
    let store = &app.store;
    let mut rows = Vec::new();

    if app.input.suggestions_open() {
        rows.push(PanelRow::Message("Recent searches".to_string()));
        rows.extend(
            store
                .history()
                .iter()
                .enumerate()
                .map(|(index, query)| PanelRow::Suggestion {
                    index,
                    query: query.to_string(),
                }),
        );
        return rows;
    }

    if !store.results_visible() {
        return rows;
    }

    rows.push(PanelRow::Filters);
    match store.status() {
        SearchStatus::Loading if store.results().is_empty() => {
            rows.push(PanelRow::Message("Searching…".to_string()));
            return rows;
        }
        SearchStatus::Unavailable(_) => {
            rows.push(PanelRow::Message(
                "Search unavailable. Results could not be loaded.".to_string(),
            ));
            return rows;
        }
        _ => {}
    }

    let sections = result_sections(
        store.results(),
        store.selected_filter(),
        app.input.preview_limit(),
    );
    if sections.is_empty() {
        rows.push(PanelRow::Message(format!(
            "No results for \"{}\"",
            store.query().trim()
        )));
        return rows;
    }

    let mut index = 0;
    for section in sections {
        rows.push(PanelRow::Header {
            kind: section.kind,
            total: section.total,
        });
        for item in section.items {
            rows.push(PanelRow::Item { index, item });
            index += 1;
        }
    }
    rows
}

pub fn panel_area(rows: usize, layout: &ScreenLayout) -> Option<Rect> {
    if rows == 0 || layout.body.height < 3 {
        return None;
    }
    let height = (rows as u16).saturating_add(2).min(layout.body.height);
    Some(Rect {
        x: layout.search.x,
        y: layout.body.y,
        width: layout.search.width,
        height,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Outside,
    Input,
    Panel,
    Item(usize),
    Suggestion(usize),
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// What a click at (`column`, `row`) lands on. The widget is the search bar
/// plus the open panel; anything else is outside.
pub fn hit_test(app: &App, column: u16, row: u16) -> Hit {
    let layout = screen_layout(app.viewport);
    if contains(layout.search, column, row) {
        return Hit::Input;
    }
    let rows = panel_rows(app);
    let Some(area) = panel_area(rows.len(), &layout) else {
        return Hit::Outside;
    };
    if !contains(area, column, row) {
        return Hit::Outside;
    }
    let line = (row - area.y) as usize;
    if line == 0 {
        return Hit::Panel;
    }
    match rows.get(line - 1) {
        Some(PanelRow::Item { index, .. }) => Hit::Item(*index),
        Some(PanelRow::Suggestion { index, .. }) => Hit::Suggestion(*index),
        _ => Hit::Panel,
    }
}

pub fn render_search_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.input.is_focused();
    let border = if focused {
        app.theme.border_focus
    } else {
        app.theme.border
    };
    let status = match app.store.status() {
        SearchStatus::Loading => " searching…",
        SearchStatus::Unavailable(_) => " unavailable",
        SearchStatus::Idle | SearchStatus::Ready => "",
    };
    let mut spans = vec![Span::styled(
        app.store.query().to_string(),
        Style::default().fg(app.theme.text),
    )];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(app.theme.primary)));
    } else if app.store.query().is_empty() {
        spans.push(Span::styled(
            "Search products, orders, suppliers…",
            Style::default().fg(app.theme.text_dim),
        ));
    }
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!("Search (/){}", status))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(paragraph, area);
}

pub fn render_panel(f: &mut Frame<'_>, app: &App, layout: &ScreenLayout) {
    let rows = panel_rows(app);
    let Some(area) = panel_area(rows.len(), layout) else {
        return;
    };

    let query = app.store.query();
    let selection = app.input.selection();
    let mark = Style::default()
        .fg(app.theme.match_fg)
        .bg(app.theme.match_bg);

    let lines: Vec<Line<'static>> = rows
        .iter()
        .map(|row| match row {
            PanelRow::Filters => {
                let chips =
                    FilterOption::for_results(app.store.results(), app.store.selected_filter());
                FilterBar {
                    filters: &chips,
                    active_style: Style::default().fg(app.theme.bg).bg(app.theme.primary),
                    inactive_style: Style::default().fg(app.theme.text_dim),
                }
                .line()
            }
            PanelRow::Header { kind, total } => Line::from(Span::styled(
                format!("{} ({})", kind.title(), total),
                Style::default()
                    .fg(entity_color(*kind, &app.theme))
                    .add_modifier(Modifier::BOLD),
            )),
            PanelRow::Item { index, item } => {
                let base = if selection == Some(*index) {
                    Style::default().fg(app.theme.text).bg(app.theme.bg_highlight)
                } else {
                    Style::default().fg(app.theme.text)
                };
                item_line(app, item, query, base, mark)
            }
            PanelRow::Suggestion { index, query } => {
                let style = if selection == Some(*index) {
                    Style::default().fg(app.theme.text).bg(app.theme.bg_highlight)
                } else {
                    Style::default().fg(app.theme.text)
                };
                Line::from(Span::styled(format!("  ↺ {}", query), style))
            }
            PanelRow::Message(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(app.theme.text_dim),
            )),
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focus)),
    );
    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}

/// Label and subtitle with query matches marked, followed by the stock badge.
pub fn item_line(
    app: &App,
    item: &ItemDisplay,
    query: &str,
    base: Style,
    mark: Style,
) -> Line<'static> {
    let mut spans = vec![Span::styled("  ", base)];
    spans.extend(highlighted_spans(item.label.as_deref(), query, base, mark));
    if item.subtitle.is_some() {
        let dim = base.fg(app.theme.text_dim);
        spans.push(Span::styled("  ", dim));
        spans.extend(highlighted_spans(item.subtitle.as_deref(), query, dim, mark));
    }
    if let Some(badge) = item.badge {
        spans.push(Span::styled(
            format!("  [{}]", badge.label()),
            base.fg(stock_badge_color(badge, &app.theme)),
        ));
    }
    Line::from(spans)
}
