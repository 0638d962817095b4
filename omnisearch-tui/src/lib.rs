//! OMNISEARCH TUI library exports.

pub mod api_client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod input;
pub mod keys;
pub mod logging;
pub mod nav;
pub mod notifications;
pub mod pages;
pub mod state;
pub mod store;
pub mod theme;
pub mod views;
pub mod widgets;
