//! Searchable entity kinds and their fixed routing tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five searchable domains of the admin backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Products,
    Orders,
    Suppliers,
    Categories,
    Users,
}

impl EntityKind {
    /// Fixed priority order used when scanning results for a redirect target.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Products,
        EntityKind::Orders,
        EntityKind::Suppliers,
        EntityKind::Categories,
        EntityKind::Users,
    ];

    /// Wire name, as used by the backend response keys and `entityType`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Products => "products",
            EntityKind::Orders => "orders",
            EntityKind::Suppliers => "suppliers",
            EntityKind::Categories => "categories",
            EntityKind::Users => "users",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Products => "Products",
            EntityKind::Orders => "Orders",
            EntityKind::Suppliers => "Suppliers",
            EntityKind::Categories => "Categories",
            EntityKind::Users => "Users",
        }
    }

    /// Canonical page route of the entity in the admin UI.
    pub fn route(&self) -> &'static str {
        match self {
            EntityKind::Products => "/products",
            EntityKind::Orders => "/orders",
            EntityKind::Suppliers => "/suppliers",
            EntityKind::Categories => "/categories",
            EntityKind::Users => "/user-management",
        }
    }

    /// Per-entity search endpoint, relative to the API base URL.
    pub fn search_path(&self) -> &'static str {
        match self {
            EntityKind::Products => "/search/products",
            EntityKind::Orders => "/search/orders",
            EntityKind::Suppliers => "/search/suppliers",
            EntityKind::Categories => "/search/categories",
            EntityKind::Users => "/search/users",
        }
    }

    /// Entity whose canonical route appears anywhere in `path`.
    ///
    /// Matching is by substring, so nested pages such as `/products/42/edit`
    /// still affiliate with products.
    pub fn from_path(path: &str) -> Option<EntityKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| path.contains(kind.route()))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_affiliation() {
        assert_eq!(EntityKind::from_path("/products"), Some(EntityKind::Products));
        assert_eq!(EntityKind::from_path("/orders/17"), Some(EntityKind::Orders));
        assert_eq!(
            EntityKind::from_path("/admin/user-management"),
            Some(EntityKind::Users)
        );
        assert_eq!(EntityKind::from_path("/dashboard"), None);
        assert_eq!(EntityKind::from_path("/users"), None);
    }
}
