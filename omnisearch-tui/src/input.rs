//! Search input controller.
//!
//! Turns keystrokes, ticks and clicks into store updates and into commands
//! for the event loop: a global search to fetch, or a location to open.
//! Typing re-arms the debounce; Enter searches at once and resolves the
//! redirect once the settle delay has elapsed.

use crate::debounce::Debouncer;
use crate::store::{SearchStore, SearchTicket};
use omnisearch_core::{resolve_submit_target, result_sections, ItemDisplay, Location};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    /// Issue the global search described by the ticket.
    Fetch(SearchTicket),
    /// Open a page; the search overlay has already been cleared.
    Navigate(Location),
}

#[derive(Debug, Clone)]
struct PendingSubmit {
    deadline: Instant,
    query: String,
}

#[derive(Debug, Clone)]
pub struct SearchInput {
    debouncer: Debouncer,
    settle: Duration,
    preview_limit: usize,
    pending_submit: Option<PendingSubmit>,
    focused: bool,
    suggestions_open: bool,
    selection: Option<usize>,
}

impl SearchInput {
    pub fn new(debounce: Duration, settle: Duration, preview_limit: usize) -> Self {
        Self {
            debouncer: Debouncer::new(debounce),
            settle,
            preview_limit,
            pending_submit: None,
            focused: false,
            suggestions_open: false,
            selection: None,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn suggestions_open(&self) -> bool {
        self.suggestions_open
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn preview_limit(&self) -> usize {
        self.preview_limit
    }

    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_armed()
    }

    /// Earliest instant at which [`SearchInput::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let submit = self.pending_submit.as_ref().map(|p| p.deadline);
        match (self.debouncer.deadline(), submit) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn focus(&mut self, store: &mut SearchStore) {
        self.focused = true;
        self.selection = None;
        self.suggestions_open = store.query().trim().is_empty() && !store.history().is_empty();
        store.show_results();
    }

    pub fn insert(&mut self, store: &mut SearchStore, ch: char, now: Instant) {
        let mut query = store.query().to_string();
        query.push(ch);
        self.edited(store, query, now);
    }

    pub fn backspace(&mut self, store: &mut SearchStore, now: Instant) {
        let mut query = store.query().to_string();
        if query.pop().is_none() {
            return;
        }
        self.edited(store, query, now);
    }

    fn edited(&mut self, store: &mut SearchStore, query: String, now: Instant) {
        self.suggestions_open = query.is_empty() && !store.history().is_empty();
        store.set_query(query);
        self.selection = None;
        self.debouncer.arm(now);
    }

    /// Advance timers. `current_path` is the page the user is on.
    pub fn tick(
        &mut self,
        store: &mut SearchStore,
        current_path: &str,
        now: Instant,
    ) -> Vec<InputCommand> {
        let mut commands = Vec::new();

        if self.debouncer.fire_if_due(now) {
            let query = store.query().to_string();
            if query.trim().is_empty() {
                store.clear_search();
            } else if let Some(ticket) = store.begin_search(&query, None) {
                commands.push(InputCommand::Fetch(ticket));
            }
        }

        let due = matches!(&self.pending_submit, Some(pending) if now >= pending.deadline);
        if due {
            if let Some(pending) = self.pending_submit.take() {
                let target = resolve_submit_target(current_path, &pending.query, store.results());
                tracing::info!(query = pending.query.as_str(), target = %target, "redirecting after submit");
                self.reset(store);
                commands.push(InputCommand::Navigate(target));
            }
        }

        commands
    }

    /// Enter: open the highlighted entry, or search now and redirect once
    /// the settle delay has passed.
    pub fn submit(&mut self, store: &mut SearchStore, now: Instant) -> Vec<InputCommand> {
        if let Some(index) = self.selection {
            if self.suggestions_open {
                return self.choose_suggestion(store, index, now);
            }
            if let Some(command) = self.open_item(store, index) {
                return vec![command];
            }
        }

        self.debouncer.disarm();
        self.suggestions_open = false;
        let query = store.query().to_string();
        match store.begin_search(&query, None) {
            Some(ticket) => {
                self.pending_submit = Some(PendingSubmit {
                    deadline: now + self.settle,
                    query,
                });
                vec![InputCommand::Fetch(ticket)]
            }
            None => {
                store.clear_search();
                Vec::new()
            }
        }
    }

    /// Fill the query from history and search it immediately.
    pub fn choose_suggestion(
        &mut self,
        store: &mut SearchStore,
        index: usize,
        now: Instant,
    ) -> Vec<InputCommand> {
        let Some(query) = store.history().get(index).map(str::to_string) else {
            return Vec::new();
        };
        store.set_query(query);
        self.suggestions_open = false;
        self.selection = None;
        self.submit(store, now)
    }

    /// Open the visible result at `index`, clearing the search.
    pub fn open_item(&mut self, store: &mut SearchStore, index: usize) -> Option<InputCommand> {
        let item = self.visible_items(store).into_iter().nth(index)?;
        let target = item.target();
        tracing::info!(kind = %item.kind, target = %target, "opening search result");
        store.hide_results();
        self.reset(store);
        Some(InputCommand::Navigate(target))
    }

    /// Escape or click outside: close the panel and dropdown, keep the data.
    pub fn dismiss(&mut self, store: &mut SearchStore) {
        store.hide_results();
        self.suggestions_open = false;
        self.selection = None;
        self.focused = false;
    }

    /// Clear button: drop query and results.
    pub fn clear(&mut self, store: &mut SearchStore) {
        store.clear_search();
        self.debouncer.disarm();
        self.pending_submit = None;
        self.suggestions_open = false;
        self.selection = None;
    }

    pub fn cycle_filter(&mut self, store: &mut SearchStore, forward: bool) {
        store.cycle_filter(forward);
        self.selection = None;
    }

    pub fn move_selection(&mut self, store: &SearchStore, down: bool) {
        let count = if self.suggestions_open {
            store.history().len()
        } else if store.results_visible() {
            self.visible_items(store).len()
        } else {
            0
        };
        if count == 0 {
            self.selection = None;
            return;
        }
        self.selection = Some(match (self.selection, down) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(idx), true) => (idx + 1) % count,
            (Some(idx), false) => {
                if idx == 0 {
                    count - 1
                } else {
                    idx - 1
                }
            }
        });
    }

    /// Items currently drawn in the panel, flattened in section order.
    pub fn visible_items(&self, store: &SearchStore) -> Vec<ItemDisplay> {
        result_sections(store.results(), store.selected_filter(), self.preview_limit)
            .into_iter()
            .flat_map(|section| section.items)
            .collect()
    }

    fn reset(&mut self, store: &mut SearchStore) {
        store.clear_search();
        self.debouncer.disarm();
        self.pending_submit = None;
        self.suggestions_open = false;
        self.selection = None;
        self.focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnisearch_core::{Order, SearchResults};

    fn input() -> SearchInput {
        SearchInput::new(Duration::from_millis(300), Duration::from_millis(100), 5)
    }

    fn type_text(input: &mut SearchInput, store: &mut SearchStore, text: &str, now: Instant) {
        for ch in text.chars() {
            input.insert(store, ch, now);
        }
    }

    #[test]
    fn test_debounce_then_fetch() {
        let mut store = SearchStore::default();
        let mut input = input();
        let start = Instant::now();
        type_text(&mut input, &mut store, "mouse", start);
        assert_eq!(store.query(), "mouse");
        assert!(input.tick(&mut store, "/", start + Duration::from_millis(100)).is_empty());

        let commands = input.tick(&mut store, "/", start + Duration::from_millis(300));
        assert!(matches!(&commands[..], [InputCommand::Fetch(t)] if t.query() == "mouse"));
        assert!(store.is_loading());
    }

    #[test]
    fn test_debounced_blank_clears() {
        let mut store = SearchStore::default();
        let mut input = input();
        let start = Instant::now();
        type_text(&mut input, &mut store, "a", start);
        input.backspace(&mut store, start);
        let commands = input.tick(&mut store, "/", start + Duration::from_secs(1));
        assert!(commands.is_empty());
        assert!(!store.results_visible());
    }

    #[test]
    fn test_submit_redirects_after_settle() {
        let mut store = SearchStore::default();
        let mut input = input();
        let start = Instant::now();
        type_text(&mut input, &mut store, "ord", start);

        let commands = input.submit(&mut store, start);
        let ticket = match &commands[..] {
            [InputCommand::Fetch(ticket)] => ticket.clone(),
            other => panic!("unexpected commands: {:?}", other),
        };
        assert!(!input.is_debouncing());
        store.complete_search(
            &ticket,
            Ok(SearchResults {
                orders: vec![Order::default()],
                ..Default::default()
            }),
        );

        assert!(input
            .tick(&mut store, "/dashboard", start + Duration::from_millis(50))
            .is_empty());
        let commands = input.tick(&mut store, "/dashboard", start + Duration::from_millis(100));
        assert_eq!(
            commands,
            vec![InputCommand::Navigate(Location::parse("/orders?search=ord"))]
        );
        assert_eq!(store.query(), "");
        assert!(store.results().is_empty());
    }

    #[test]
    fn test_dismiss_keeps_query() {
        let mut store = SearchStore::default();
        let mut input = input();
        input.focus(&mut store);
        type_text(&mut input, &mut store, "desk", Instant::now());
        input.dismiss(&mut store);
        assert_eq!(store.query(), "desk");
        assert!(!input.is_focused());
        assert!(!input.suggestions_open());
    }

    #[test]
    fn test_suggestions_offer_history() {
        let mut store = SearchStore::default();
        let mut input = input();
        let ticket = store.begin_search("chair", None).unwrap();
        store.complete_search(&ticket, Ok(SearchResults::empty()));
        store.clear_search();

        input.focus(&mut store);
        assert!(input.suggestions_open());
        input.move_selection(&store, true);
        let commands = input.submit(&mut store, Instant::now());
        assert!(matches!(&commands[..], [InputCommand::Fetch(t)] if t.query() == "chair"));
        assert_eq!(store.query(), "chair");
    }
}
