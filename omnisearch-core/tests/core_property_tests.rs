use omnisearch_core::{
    highlight, resolve_submit_target, result_sections, EntityFilter, EntityKind, Order, Product,
    SearchHistory, SearchResults, User,
};
use proptest::prelude::*;

fn results_with(counts: [usize; 5]) -> SearchResults {
    SearchResults {
        products: vec![Product::default(); counts[0]],
        orders: vec![Order::default(); counts[1]],
        suppliers: vec![Default::default(); counts[2]],
        categories: vec![Default::default(); counts[3]],
        users: vec![User::default(); counts[4]],
    }
}

proptest! {
    // ========================================================================
    // History: bounded, duplicate-free
    // ========================================================================

    #[test]
    fn history_never_exceeds_limit_or_duplicates(queries in prop::collection::vec("[a-e]{1,2}", 0..40)) {
        let mut history = SearchHistory::default();
        for query in &queries {
            history.record(query);
        }
        prop_assert!(history.len() <= 5);
        let entries: Vec<&str> = history.iter().collect();
        for (i, entry) in entries.iter().enumerate() {
            prop_assert!(!entries[i + 1..].contains(entry));
        }
    }

    // ========================================================================
    // Highlight: segments rebuild the text; marked runs equal the query
    // ========================================================================

    #[test]
    fn highlight_preserves_text(text in "[a-zA-Z .*+?()]{0,40}", query in "[a-zA-Z.*(]{1,3}") {
        let segments = highlight(Some(&text), &query);
        let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(rebuilt, text);
        for segment in segments.iter().filter(|s| s.matched) {
            prop_assert_eq!(segment.text.to_lowercase(), query.to_lowercase());
        }
    }

    // ========================================================================
    // Navigation: affiliated pages always reload themselves
    // ========================================================================

    #[test]
    fn affiliated_page_ignores_results(
        counts in prop::array::uniform5(0usize..3),
        kind_idx in 0usize..5,
        query in "[a-z]{1,8}",
    ) {
        let kind = EntityKind::ALL[kind_idx];
        let path = format!("{}/detail", kind.route());
        let target = resolve_submit_target(&path, &query, &results_with(counts));
        prop_assert_eq!(target.path.as_str(), kind.route());
        prop_assert_eq!(target.search.as_deref(), Some(query.as_str()));
    }

    #[test]
    fn unaffiliated_page_picks_first_non_empty(counts in prop::array::uniform5(0usize..3)) {
        let target = resolve_submit_target("/dashboard", "q", &results_with(counts));
        let expected = counts
            .iter()
            .position(|count| *count > 0)
            .map(|idx| EntityKind::ALL[idx])
            .unwrap_or(EntityKind::Products);
        prop_assert_eq!(target.path.as_str(), expected.route());
    }

    // ========================================================================
    // Display: filtering is display-only and truncation is bounded
    // ========================================================================

    #[test]
    fn sections_respect_filter_and_limit(
        counts in prop::array::uniform5(0usize..9),
        choice in 0usize..6,
    ) {
        let results = results_with(counts);
        let filter = EntityFilter::CHOICES[choice];
        let sections = result_sections(&results, filter, 5);
        for section in &sections {
            prop_assert!(filter.admits(section.kind));
            prop_assert!(section.items.len() <= 5);
            prop_assert!(!section.items.is_empty());
            prop_assert_eq!(section.total, results.count(section.kind));
        }
        prop_assert_eq!(results, results_with(counts));
    }
}
