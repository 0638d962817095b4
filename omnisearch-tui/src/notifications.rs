//! Notification system for the TUI.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at >= ttl
    }
}

/// Footer messages, newest last, dropped once they age out.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    entries: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.entries.push(Notification::new(level, message));
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.last()
    }

    pub fn prune(&mut self, now: DateTime<Utc>, ttl: Duration) {
        self.entries.retain(|note| !note.is_expired(now, ttl));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_drops_expired() {
        let mut notes = Notifications::default();
        notes.push(NotificationLevel::Error, "search unavailable");
        let later = Utc::now() + Duration::seconds(10);
        notes.prune(later, Duration::seconds(5));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_latest_is_newest() {
        let mut notes = Notifications::default();
        notes.push(NotificationLevel::Info, "first");
        notes.push(NotificationLevel::Warning, "second");
        assert_eq!(notes.latest().map(|n| n.message.as_str()), Some("second"));
    }
}
