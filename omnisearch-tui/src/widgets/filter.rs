//! Category filter chips.

use omnisearch_core::{EntityFilter, SearchResults};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub active: bool,
}

impl FilterOption {
    /// One chip per choice, labelled with its stored result count.
    pub fn for_results(results: &SearchResults, selected: EntityFilter) -> Vec<FilterOption> {
        EntityFilter::CHOICES
            .iter()
            .map(|choice| {
                let count = match choice {
                    EntityFilter::All => results.total(),
                    EntityFilter::Only(kind) => results.count(*kind),
                };
                FilterOption {
                    label: format!("{} {}", choice.label(), count),
                    active: *choice == selected,
                }
            })
            .collect()
    }
}

pub struct FilterBar<'a> {
    pub filters: &'a [FilterOption],
    pub active_style: Style,
    pub inactive_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn line(&self) -> Line<'static> {
        let spans: Vec<Span<'static>> = self
            .filters
            .iter()
            .map(|filter| {
                let style = if filter.active {
                    self.active_style.add_modifier(Modifier::BOLD)
                } else {
                    self.inactive_style
                };
                Span::styled(format!(" {} ", filter.label), style)
            })
            .collect();
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnisearch_core::{EntityKind, Order};

    #[test]
    fn test_chip_counts_and_selection() {
        let results = SearchResults {
            orders: vec![Order::default(), Order::default()],
            ..Default::default()
        };
        let chips = FilterOption::for_results(&results, EntityFilter::Only(EntityKind::Orders));
        assert_eq!(chips.len(), 6);
        assert_eq!(chips[0].label, "All 2");
        assert_eq!(chips[2].label, "Orders 2");
        assert!(chips[2].active);
        assert!(!chips[0].active);
    }
}
