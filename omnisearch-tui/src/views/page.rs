//! Page body: entity listings and the dashboard.

use crate::state::App;
use crate::theme::stock_badge_color;
use crate::views::search::item_line;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    match app.page.entity() {
        Some(_) => render_entity_page(f, app, area),
        None => render_dashboard(f, app, area),
    }
}

fn render_entity_page(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let search = app.page.location.search.clone().unwrap_or_default();
    let title = if search.is_empty() {
        crate::nav::page_title(&app.page.location).to_string()
    } else {
        format!("{} matching \"{}\"", crate::nav::page_title(&app.page.location), search)
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if app.page.loading {
        let loading = Paragraph::new("Loading…")
            .style(Style::default().fg(app.theme.text_dim))
            .block(block);
        f.render_widget(loading, chunks[0]);
        return;
    }
    if let Some(error) = &app.page.error {
        let failed = Paragraph::new(format!("Could not load this page: {}", error))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(app.theme.error))
            .block(block);
        f.render_widget(failed, chunks[0]);
        return;
    }

    let displays = app
        .page
        .items
        .as_ref()
        .map(|items| items.displays())
        .unwrap_or_default();
    if displays.is_empty() {
        let empty = Paragraph::new("Nothing to show.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(block);
        f.render_widget(empty, chunks[0]);
        return;
    }

    let base = Style::default().fg(app.theme.text);
    let mark = Style::default()
        .fg(app.theme.match_fg)
        .bg(app.theme.match_bg);
    let items: Vec<ListItem> = displays
        .iter()
        .map(|item| ListItem::new(item_line(app, item, &search, base, mark)))
        .collect();

    let mut state = ListState::default();
    state.select(app.page.selected);
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(app.theme.bg_highlight));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let Some(item) = app.page.selected.and_then(|idx| displays.get(idx)) else {
        return;
    };
    let mut lines = vec![
        Line::from(format!("Name: {}", item.label.as_deref().unwrap_or("-"))),
        Line::from(format!("Details: {}", item.subtitle.as_deref().unwrap_or("-"))),
        Line::from(format!("Link: {}", item.target())),
    ];
    if let Some(badge) = item.badge {
        lines.push(Line::styled(
            format!("Stock: {}", badge.label()),
            Style::default().fg(stock_badge_color(badge, &app.theme)),
        ));
    }
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(app.theme.secondary))
        .block(Block::default().title("Details").borders(Borders::ALL));
    f.render_widget(detail, chunks[1]);
}

fn render_dashboard(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let hints = Paragraph::new(
        "Press / and start typing to search the catalog.\n\
         Press Enter to jump to the page that best matches.\n\
         Press 1-5 to browse products, orders, suppliers, categories or users.",
    )
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(app.theme.text))
    .block(Block::default().title("Dashboard").borders(Borders::ALL));
    f.render_widget(hints, chunks[0]);

    let history: Vec<ListItem> = if app.store.history().is_empty() {
        vec![ListItem::new("No searches yet").style(Style::default().fg(app.theme.text_dim))]
    } else {
        app.store
            .history()
            .iter()
            .map(|query| ListItem::new(query.to_string()))
            .collect()
    };
    let list = List::new(history).block(
        Block::default()
            .title("Recent searches")
            .borders(Borders::ALL),
    );
    f.render_widget(list, chunks[1]);
}
