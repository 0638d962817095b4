//! Event types for the TUI event loop.

use crate::api_client::ApiClientError;
use crate::pages::PageItems;
use crate::store::SearchTicket;
use crossterm::event::{KeyEvent, MouseEvent};
use omnisearch_core::SearchResults;

#[derive(Debug)]
pub enum TuiEvent {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize { width: u16, height: u16 },
    SearchCompleted {
        ticket: SearchTicket,
        outcome: Result<SearchResults, ApiClientError>,
    },
    PageLoaded {
        generation: u64,
        outcome: Result<PageItems, ApiClientError>,
    },
}
