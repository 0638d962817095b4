//! Ledger theme and color utilities.

use crate::notifications::NotificationLevel;
use omnisearch_core::{EntityKind, StockBadge};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct LedgerTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
    pub match_fg: Color,
    pub match_bg: Color,
}

impl LedgerTheme {
    pub fn ledger() -> Self {
        Self {
            bg: Color::Rgb(18, 20, 24),
            bg_highlight: Color::Rgb(40, 44, 52),
            primary: Color::Rgb(97, 175, 239),
            secondary: Color::Rgb(198, 120, 221),
            accent: Color::Rgb(229, 192, 123),
            success: Color::Rgb(152, 195, 121),
            warning: Color::Rgb(229, 192, 123),
            error: Color::Rgb(224, 108, 117),
            info: Color::Rgb(86, 182, 194),
            text: Color::Rgb(220, 223, 228),
            text_dim: Color::Rgb(127, 132, 142),
            border: Color::Rgb(62, 68, 81),
            border_focus: Color::Rgb(97, 175, 239),
            match_fg: Color::Rgb(18, 20, 24),
            match_bg: Color::Rgb(229, 192, 123),
        }
    }
}

impl Default for LedgerTheme {
    fn default() -> Self {
        Self::ledger()
    }
}

pub fn stock_badge_color(badge: StockBadge, theme: &LedgerTheme) -> Color {
    match badge {
        StockBadge::Low => theme.error,
        StockBadge::Ok => theme.success,
    }
}

pub fn entity_color(kind: EntityKind, theme: &LedgerTheme) -> Color {
    match kind {
        EntityKind::Products => theme.primary,
        EntityKind::Orders => theme.accent,
        EntityKind::Suppliers => theme.secondary,
        EntityKind::Categories => theme.info,
        EntityKind::Users => theme.success,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &LedgerTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
    }
}
