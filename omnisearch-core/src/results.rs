//! The categorized result bundle of a global search.

use crate::entity::EntityKind;
use crate::records::{Category, Order, Product, Supplier, User};
use serde::{Deserialize, Serialize};

/// Per-entity result arrays. All five are always present; a key missing from
/// a backend response deserializes to an empty array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub suppliers: Vec<Supplier>,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Products => self.products.len(),
            EntityKind::Orders => self.orders.len(),
            EntityKind::Suppliers => self.suppliers.len(),
            EntityKind::Categories => self.categories.len(),
            EntityKind::Users => self.users.len(),
        }
    }

    pub fn total(&self) -> usize {
        EntityKind::ALL.iter().map(|kind| self.count(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// First entity, in priority order, with at least one result.
    pub fn first_non_empty(&self) -> Option<EntityKind> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| self.count(*kind) > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let results: SearchResults =
            serde_json::from_str(r#"{"orders":[{"orderNumber":"ORD-1"}]}"#).unwrap();
        assert!(results.products.is_empty());
        assert!(results.users.is_empty());
        assert_eq!(results.count(EntityKind::Orders), 1);
        assert_eq!(results.first_non_empty(), Some(EntityKind::Orders));
    }

    #[test]
    fn test_empty_bundle() {
        let results = SearchResults::empty();
        assert!(results.is_empty());
        assert_eq!(results.first_non_empty(), None);
    }
}
