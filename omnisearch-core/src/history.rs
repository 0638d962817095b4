//! Bounded, deduplicated search history.

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Most-recent-first list of distinct queries.
///
/// A query that is already present is left where it is; it is neither
/// duplicated nor promoted to the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    limit: usize,
}

impl SearchHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record `query`. Returns `true` when a new entry was added.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() || self.limit == 0 || self.contains(query) {
            return false;
        }
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.limit);
        true
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.iter().any(|entry| entry == query)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first_and_capped() {
        let mut history = SearchHistory::default();
        for query in ["a", "b", "c", "d", "e", "f"] {
            history.record(query);
        }
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_resubmission_stays_in_place() {
        let mut history = SearchHistory::default();
        history.record("mouse");
        history.record("laptop");
        assert!(!history.record("mouse"));
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["laptop", "mouse"]);
    }

    #[test]
    fn test_blank_not_recorded() {
        let mut history = SearchHistory::default();
        assert!(!history.record("   "));
        assert!(history.is_empty());
    }
}
