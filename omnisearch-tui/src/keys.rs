//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The search input is focused; printable keys edit the query.
    Search,
    /// The current page is focused.
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusSearch,
    Insert(char),
    Backspace,
    Submit,
    Dismiss,
    ClearSearch,
    NextFilter,
    PrevFilter,
    MoveUp,
    MoveDown,
    /// Jump to a page: 0 is the dashboard, 1-5 the entity pages.
    OpenPage(usize),
    Refresh,
    OpenHelp,
}

pub fn map_key(event: KeyEvent, focus: Focus) -> Option<Action> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearSearch),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match focus {
        Focus::Search => match code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::Dismiss),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Tab => Some(Action::NextFilter),
            KeyCode::BackTab => Some(Action::PrevFilter),
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::ALT) => Some(Action::Insert(c)),
            _ => None,
        },
        Focus::Page => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('/') => Some(Action::FocusSearch),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Esc => Some(Action::Dismiss),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Char(c) if ('0'..='5').contains(&c) => {
                c.to_digit(10).map(|d| Action::OpenPage(d as usize))
            }
            _ => None,
        },
    }
}
