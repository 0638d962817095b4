//! Client-side locations and the post-search redirect heuristic.

use crate::entity::EntityKind;
use crate::results::SearchResults;
use std::fmt;

/// Name of the query parameter carried to entity pages.
pub const SEARCH_PARAM: &str = "search";

/// A page path plus the optional `search` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub search: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Canonical page of `kind`, optionally carrying a search term.
    pub fn for_entity(kind: EntityKind, search: Option<&str>) -> Self {
        Self {
            path: kind.route().to_string(),
            search: search.map(str::to_string),
        }
    }

    /// Parse `"/path?search=term"`. Other parameters are ignored.
    pub fn parse(url: &str) -> Self {
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (url, None),
        };
        let search = query.and_then(|query| {
            query.split('&').find_map(|pair| {
                let (key, value) = pair.split_once('=')?;
                if key != SEARCH_PARAM {
                    return None;
                }
                let value = value.replace('+', " ");
                urlencoding::decode(&value).ok().map(|v| v.into_owned())
            })
        });
        Self {
            path: path.to_string(),
            search,
        }
    }

    /// Entity the page belongs to, if any.
    pub fn entity(&self) -> Option<EntityKind> {
        EntityKind::from_path(&self.path)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.search {
            Some(search) => write!(
                f,
                "{}?{}={}",
                self.path,
                SEARCH_PARAM,
                urlencoding::encode(search)
            ),
            None => f.write_str(&self.path),
        }
    }
}

/// Where an explicit submit of `query` should land.
///
/// 1. A page affiliated with an entity reloads itself with the query,
///    whatever the results hold.
/// 2. Otherwise the first entity, in priority order, with results.
/// 3. Otherwise the products page.
pub fn resolve_submit_target(current_path: &str, query: &str, results: &SearchResults) -> Location {
    let kind = EntityKind::from_path(current_path)
        .or_else(|| results.first_non_empty())
        .unwrap_or(EntityKind::Products);
    Location::for_entity(kind, Some(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Order, Product};

    fn orders_only() -> SearchResults {
        SearchResults {
            orders: vec![Order {
                order_number: Some("ORD-7".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_affiliated_page_wins() {
        let target = resolve_submit_target("/products", "mouse", &orders_only());
        assert_eq!(target.to_string(), "/products?search=mouse");
    }

    #[test]
    fn test_first_non_empty_category() {
        let target = resolve_submit_target("/dashboard", "ord", &orders_only());
        assert_eq!(target.to_string(), "/orders?search=ord");
    }

    #[test]
    fn test_priority_order_prefers_products() {
        let mut results = orders_only();
        results.products.push(Product::default());
        let target = resolve_submit_target("/", "x", &results);
        assert_eq!(target.path, "/products");
    }

    #[test]
    fn test_fallback_to_products() {
        let target = resolve_submit_target("/reports", "nothing", &SearchResults::empty());
        assert_eq!(target.to_string(), "/products?search=nothing");
    }

    #[test]
    fn test_users_route() {
        let target = resolve_submit_target("/user-management/roles", "ann", &SearchResults::empty());
        assert_eq!(target.to_string(), "/user-management?search=ann");
    }

    #[test]
    fn test_location_encoding_roundtrip() {
        let location = Location::new("/orders").with_search("a&b c");
        let url = location.to_string();
        assert_eq!(url, "/orders?search=a%26b%20c");
        assert_eq!(Location::parse(&url), location);
        assert_eq!(Location::parse("/dashboard"), Location::new("/dashboard"));
    }
}
