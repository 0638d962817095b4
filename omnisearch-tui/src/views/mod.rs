//! View rendering dispatch.

pub mod page;
pub mod search;

use crate::keys::Focus;
use crate::nav::page_title;
use crate::state::App;
use crate::theme::notification_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    ScreenLayout {
        header: chunks[0],
        search: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = screen_layout(f.size());

    render_header(f, app, layout.header);
    search::render_search_bar(f, app, layout.search);
    page::render(f, app, layout.body);
    search::render_panel(f, app, &layout);
    render_footer(f, app, layout.footer);

    if app.help_visible {
        render_help(f, app, layout.body);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(
        "OMNISEARCH | {} | {}",
        page_title(&app.page.location),
        app.page.location
    );
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.focus() {
        Focus::Search => "type to search • Enter go • ↑/↓ pick • Tab category • Esc close • Ctrl-U clear",
        Focus::Page => "/ search • 0-5 pages • j/k move • Ctrl-R reload • ? help • q quit",
    };
    let (text, style) = match app.notifications.latest() {
        Some(note) => (
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        ),
        None => (help.to_string(), Style::default().fg(app.theme.text_dim)),
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_help(f: &mut Frame<'_>, app: &App, area: Rect) {
    let width = area.width.min(60);
    let height = area.height.min(12);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    let text = format!(
        "Press / to search across products, orders, suppliers, categories and users.\n\
         Results refresh {}ms after you stop typing. Enter opens the best matching page; \
         pick a single result with ↑/↓ first to open it directly.\n\
         Tab cycles the category filter. Esc or a click outside closes the panel.\n\
         0 dashboard, 1 products, 2 orders, 3 suppliers, 4 categories, 5 users.",
        app.config.search.debounce_ms
    );
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title("Keybindings")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
