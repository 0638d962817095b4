//! Application state and event handling.
//!
//! `App` owns the search store, the input controller and the current page.
//! Handlers mutate that state synchronously and return [`Effect`]s; the
//! event loop runs the network side of each effect and feeds the outcome
//! back through [`App::apply_search`] and [`App::apply_page`].

use crate::api_client::ApiClientError;
use crate::config::TuiConfig;
use crate::input::{InputCommand, SearchInput};
use crate::keys::{Action, Focus};
use crate::nav::page_for_index;
use crate::notifications::{NotificationLevel, Notifications};
use crate::pages::{PageItems, PageRequest, PageState};
use crate::store::{Completion, SearchStore, SearchTicket};
use crate::theme::LedgerTheme;
use crate::views::search::{hit_test, Hit};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use omnisearch_core::{Location, SearchFilters, SearchResults};
use ratatui::layout::Rect;
use std::time::Instant;

/// Work the event loop performs on behalf of the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Search(SearchTicket),
    LoadPage(PageRequest),
    Quit,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: LedgerTheme,
    pub store: SearchStore,
    pub input: SearchInput,
    pub page: PageState,
    pub notifications: Notifications,
    /// Terminal area of the last frame, used for hit-testing clicks.
    pub viewport: Rect,
    pub help_visible: bool,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let mut filters = SearchFilters::default();
        filters.limit = config.search.result_limit;
        let store = SearchStore::new(config.search.history_limit).with_filters(filters);
        let input = SearchInput::new(
            config.search.debounce(),
            config.search.submit_settle(),
            config.search.preview_limit,
        );
        let page = PageState::new(Location::new("/"));
        Self {
            config,
            theme: LedgerTheme::ledger(),
            store,
            input,
            page,
            notifications: Notifications::default(),
            viewport: Rect::default(),
            help_visible: false,
        }
    }

    pub fn focus(&self) -> Focus {
        if self.input.is_focused() {
            Focus::Search
        } else {
            Focus::Page
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(level, message);
    }

    /// Open `location` and return the page load it needs, if any.
    pub fn navigate(&mut self, location: Location) -> Vec<Effect> {
        tracing::info!(from = %self.page.location, to = %location, "navigating");
        let filters = self.store.filters().clone();
        self.page
            .open(location, &filters)
            .map(Effect::LoadPage)
            .into_iter()
            .collect()
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) -> Vec<Effect> {
        match action {
            Action::Quit => return vec![Effect::Quit],
            Action::FocusSearch => self.input.focus(&mut self.store),
            Action::Insert(ch) => self.input.insert(&mut self.store, ch, now),
            Action::Backspace => self.input.backspace(&mut self.store, now),
            Action::Submit => {
                let commands = self.input.submit(&mut self.store, now);
                return self.run_commands(commands);
            }
            Action::Dismiss => {
                if self.help_visible {
                    self.help_visible = false;
                } else {
                    self.input.dismiss(&mut self.store);
                }
            }
            Action::ClearSearch => self.input.clear(&mut self.store),
            Action::NextFilter => self.input.cycle_filter(&mut self.store, true),
            Action::PrevFilter => self.input.cycle_filter(&mut self.store, false),
            Action::MoveUp | Action::MoveDown => {
                let down = action == Action::MoveDown;
                if self.input.is_focused() {
                    self.input.move_selection(&self.store, down);
                } else if down {
                    self.page.select_next();
                } else {
                    self.page.select_previous();
                }
            }
            Action::OpenPage(index) => {
                if let Some(location) = page_for_index(index) {
                    return self.navigate(location);
                }
            }
            Action::Refresh => {
                let filters = self.store.filters().clone();
                match self.page.reload(&filters) {
                    Some(request) => return vec![Effect::LoadPage(request)],
                    None => self.notify(NotificationLevel::Info, "Nothing to reload on this page."),
                }
            }
            Action::OpenHelp => self.help_visible = true,
        }
        Vec::new()
    }

    /// Left clicks focus the input, open results, or dismiss the widget when
    /// they land outside it.
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) -> Vec<Effect> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match hit_test(self, event.column, event.row) {
            Hit::Outside => {
                if self.input.is_focused() || self.store.results_visible() {
                    self.input.dismiss(&mut self.store);
                }
                Vec::new()
            }
            Hit::Input => {
                self.input.focus(&mut self.store);
                Vec::new()
            }
            Hit::Panel => Vec::new(),
            Hit::Item(index) => {
                let commands = self.input.open_item(&mut self.store, index).into_iter().collect();
                self.run_commands(commands)
            }
            Hit::Suggestion(index) => {
                let commands = self.input.choose_suggestion(&mut self.store, index, now);
                self.run_commands(commands)
            }
        }
    }

    pub fn on_tick(&mut self, now: Instant) -> Vec<Effect> {
        self.notifications
            .prune(chrono::Utc::now(), chrono::Duration::seconds(8));
        let path = self.page.location.path.clone();
        let commands = self.input.tick(&mut self.store, &path, now);
        self.run_commands(commands)
    }

    pub fn apply_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<SearchResults, ApiClientError>,
    ) {
        if self.store.complete_search(ticket, outcome) == Completion::Failed {
            self.notify(
                NotificationLevel::Error,
                "Search unavailable. Try again shortly.",
            );
        }
    }

    pub fn apply_page(&mut self, generation: u64, outcome: Result<PageItems, ApiClientError>) {
        let was_loading = self.page.loading;
        if let Err(err) = self.page.finish(generation, outcome) {
            tracing::warn!(error = %err, page = %self.page.location, "page load failed");
            self.notify(NotificationLevel::Error, format!("Page load failed: {}", err));
            return;
        }
        if !was_loading || self.page.loading {
            return;
        }
        if let (Some(items), Some(search)) = (&self.page.items, &self.page.location.search) {
            if items.is_empty() {
                let message = format!("No {} match \"{}\"", items.kind(), search);
                self.notify(NotificationLevel::Warning, message);
            }
        }
    }

    fn run_commands(&mut self, commands: Vec<InputCommand>) -> Vec<Effect> {
        let mut effects = Vec::new();
        for command in commands {
            match command {
                InputCommand::Fetch(ticket) => effects.push(Effect::Search(ticket)),
                InputCommand::Navigate(location) => effects.extend(self.navigate(location)),
            }
        }
        effects
    }
}
