//! Search filters and their flattening into query parameters.

use crate::entity::EntityKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Either every entity type or a single one.
///
/// Used both as the `entityType` request filter and as the display-side
/// category selection of the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityFilter {
    #[default]
    All,
    Only(EntityKind),
}

impl EntityFilter {
    /// Chip order of the result panel.
    pub const CHOICES: [EntityFilter; 6] = [
        EntityFilter::All,
        EntityFilter::Only(EntityKind::Products),
        EntityFilter::Only(EntityKind::Orders),
        EntityFilter::Only(EntityKind::Suppliers),
        EntityFilter::Only(EntityKind::Categories),
        EntityFilter::Only(EntityKind::Users),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityFilter::All => "all",
            EntityFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityFilter::All => "All",
            EntityFilter::Only(kind) => kind.title(),
        }
    }

    pub fn admits(&self, kind: EntityKind) -> bool {
        match self {
            EntityFilter::All => true,
            EntityFilter::Only(selected) => *selected == kind,
        }
    }

    fn position(&self) -> usize {
        Self::CHOICES
            .iter()
            .position(|choice| choice == self)
            .unwrap_or(0)
    }

    pub fn next(&self) -> EntityFilter {
        Self::CHOICES[(self.position() + 1) % Self::CHOICES.len()]
    }

    pub fn previous(&self) -> EntityFilter {
        let idx = self.position();
        let prev = if idx == 0 {
            Self::CHOICES.len() - 1
        } else {
            idx - 1
        };
        Self::CHOICES[prev]
    }
}

impl fmt::Display for EntityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Optional narrowing applied to every search call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub entity_type: EntityFilter,
    pub limit: Option<u32>,
    pub date_range: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub price_range: PriceRange,
    pub stock_level: Option<String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten `query` and the filters into request parameters.
    ///
    /// `q` and `entityType` are always present; every other field is only
    /// emitted when set to a non-blank value.
    pub fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.to_string()),
            ("entityType", self.entity_type.as_str().to_string()),
        ];
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        push_text(&mut params, "dateRange", self.date_range.as_deref());
        push_text(&mut params, "status", self.status.as_deref());
        push_text(&mut params, "category", self.category.as_deref());
        if let Some(min) = self.price_range.min {
            params.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.price_range.max {
            params.push(("maxPrice", max.to_string()));
        }
        push_text(&mut params, "stockLevel", self.stock_level.as_deref());
        params
    }
}

fn push_text(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        let value = value.trim();
        if !value.is_empty() {
            params.push((key, value.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &[(&'static str, String)]) -> Vec<&'static str> {
        params.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_default_filters_send_only_query_and_type() {
        let params = SearchFilters::new().query_params("mouse");
        assert_eq!(
            params,
            vec![("q", "mouse".to_string()), ("entityType", "all".to_string())]
        );
    }

    #[test]
    fn test_blank_fields_are_dropped() {
        let filters = SearchFilters {
            entity_type: EntityFilter::Only(EntityKind::Orders),
            status: Some("  ".to_string()),
            category: Some("Peripherals".to_string()),
            price_range: PriceRange {
                min: Some(5.0),
                max: None,
            },
            ..Default::default()
        };
        let params = filters.query_params("kb");
        assert_eq!(keys(&params), vec!["q", "entityType", "category", "minPrice"]);
        assert_eq!(params[1].1, "orders");
        assert_eq!(params[3].1, "5");
    }

    #[test]
    fn test_filter_cycle_wraps() {
        assert_eq!(EntityFilter::All.previous(), EntityFilter::Only(EntityKind::Users));
        assert_eq!(EntityFilter::Only(EntityKind::Users).next(), EntityFilter::All);
        assert_eq!(
            EntityFilter::All.next(),
            EntityFilter::Only(EntityKind::Products)
        );
    }
}
