//! Display model for the result panel.
//!
//! Turns a stored [`SearchResults`] into titled sections of presentable
//! items. Category selection and preview truncation happen here only; the
//! underlying results are never reduced.

use crate::entity::EntityKind;
use crate::filters::EntityFilter;
use crate::navigation::Location;
use crate::records::{Category, Order, Product, Supplier, User};
use crate::results::SearchResults;

/// Items shown per section before truncation.
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBadge {
    Low,
    Ok,
}

impl StockBadge {
    /// `Low` when quantity is at or below the reorder level.
    pub fn for_levels(quantity: Option<i64>, reorder_level: Option<i64>) -> Option<StockBadge> {
        match (quantity, reorder_level) {
            (Some(quantity), Some(reorder)) if quantity <= reorder => Some(StockBadge::Low),
            (Some(_), _) => Some(StockBadge::Ok),
            (None, _) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockBadge::Low => "low",
            StockBadge::Ok => "ok",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDisplay {
    pub kind: EntityKind,
    pub label: Option<String>,
    pub subtitle: Option<String>,
    pub badge: Option<StockBadge>,
    /// Value carried as the `search` parameter when the item is opened.
    pub search_value: Option<String>,
}

impl ItemDisplay {
    /// Page to open when this item is chosen.
    pub fn target(&self) -> Location {
        Location::for_entity(self.kind, self.search_value.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSection {
    pub kind: EntityKind,
    /// Number of stored results, before truncation.
    pub total: usize,
    pub items: Vec<ItemDisplay>,
}

/// Sections for every admitted entity kind with results, in priority order.
pub fn result_sections(
    results: &SearchResults,
    filter: EntityFilter,
    preview_limit: usize,
) -> Vec<ResultSection> {
    EntityKind::ALL
        .iter()
        .copied()
        .filter(|kind| filter.admits(*kind))
        .filter_map(|kind| {
            let items = items_for(results, kind, preview_limit);
            if items.is_empty() {
                return None;
            }
            Some(ResultSection {
                kind,
                total: results.count(kind),
                items,
            })
        })
        .collect()
}

fn items_for(results: &SearchResults, kind: EntityKind, limit: usize) -> Vec<ItemDisplay> {
    match kind {
        EntityKind::Products => results.products.iter().take(limit).map(product_item).collect(),
        EntityKind::Orders => results.orders.iter().take(limit).map(order_item).collect(),
        EntityKind::Suppliers => results.suppliers.iter().take(limit).map(supplier_item).collect(),
        EntityKind::Categories => results
            .categories
            .iter()
            .take(limit)
            .map(category_item)
            .collect(),
        EntityKind::Users => results.users.iter().take(limit).map(user_item).collect(),
    }
}

pub fn product_item(product: &Product) -> ItemDisplay {
    let mut parts = Vec::new();
    if let Some(sku) = &product.sku {
        parts.push(format!("SKU: {}", sku));
    }
    if let Some(price) = product.price {
        parts.push(format_money(price));
    }
    if let Some(quantity) = product.quantity {
        parts.push(format!("Qty: {}", quantity));
    }
    ItemDisplay {
        kind: EntityKind::Products,
        label: product.name.clone(),
        subtitle: join_parts(parts),
        badge: StockBadge::for_levels(product.quantity, product.reorder_level),
        search_value: product.name.clone(),
    }
}

pub fn order_item(order: &Order) -> ItemDisplay {
    let mut parts = Vec::new();
    if let Some(amount) = order.total_amount {
        parts.push(format_money(amount));
    }
    if let Some(date) = &order.order_date {
        parts.push(date.clone());
    }
    if let Some(status) = &order.status {
        parts.push(status.clone());
    }
    ItemDisplay {
        kind: EntityKind::Orders,
        label: order.order_number.clone(),
        subtitle: join_parts(parts),
        badge: None,
        search_value: order.order_number.clone(),
    }
}

pub fn supplier_item(supplier: &Supplier) -> ItemDisplay {
    let parts = [&supplier.contact_person, &supplier.email]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    ItemDisplay {
        kind: EntityKind::Suppliers,
        label: supplier.name.clone(),
        subtitle: join_parts(parts),
        badge: None,
        search_value: supplier.name.clone(),
    }
}

pub fn category_item(category: &Category) -> ItemDisplay {
    ItemDisplay {
        kind: EntityKind::Categories,
        label: category.name.clone(),
        subtitle: category.description.clone(),
        badge: None,
        search_value: category.name.clone(),
    }
}

pub fn user_item(user: &User) -> ItemDisplay {
    let parts = [&user.email, &user.role]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    ItemDisplay {
        kind: EntityKind::Users,
        label: user.full_name(),
        subtitle: join_parts(parts),
        badge: None,
        search_value: user.first_name.clone(),
    }
}

fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn join_parts(parts: Vec<String>) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, quantity: i64, reorder: i64) -> Product {
        Product {
            name: Some(name.to_string()),
            sku: Some(format!("SKU-{}", name)),
            price: Some(19.5),
            quantity: Some(quantity),
            reorder_level: Some(reorder),
            ..Default::default()
        }
    }

    fn mixed_results() -> SearchResults {
        SearchResults {
            products: (0..8).map(|i| product(&format!("p{}", i), 10, 2)).collect(),
            orders: vec![Order {
                order_number: Some("ORD-1".to_string()),
                total_amount: Some(42.0),
                order_date: Some("2024-03-01".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_sections_truncate_but_keep_total() {
        let sections = result_sections(&mixed_results(), EntityFilter::All, DEFAULT_PREVIEW_LIMIT);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, EntityKind::Products);
        assert_eq!(sections[0].items.len(), 5);
        assert_eq!(sections[0].total, 8);
        assert_eq!(sections[1].kind, EntityKind::Orders);
    }

    #[test]
    fn test_filter_renders_only_selected_category() {
        let results = mixed_results();
        let sections = result_sections(
            &results,
            EntityFilter::Only(EntityKind::Orders),
            DEFAULT_PREVIEW_LIMIT,
        );
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, EntityKind::Orders);
        assert_eq!(results.products.len(), 8);
    }

    #[test]
    fn test_stock_badge_threshold() {
        assert_eq!(product_item(&product("a", 2, 2)).badge, Some(StockBadge::Low));
        assert_eq!(product_item(&product("b", 3, 2)).badge, Some(StockBadge::Ok));
        assert_eq!(StockBadge::for_levels(None, Some(2)), None);
    }

    #[test]
    fn test_subtitles() {
        let item = product_item(&product("Mouse", 4, 1));
        assert_eq!(item.subtitle.as_deref(), Some("SKU: SKU-Mouse • $19.50 • Qty: 4"));
        let order = &mixed_results().orders[0];
        assert_eq!(
            order_item(order).subtitle.as_deref(),
            Some("$42.00 • 2024-03-01")
        );
    }

    #[test]
    fn test_item_targets() {
        let order = &mixed_results().orders[0];
        assert_eq!(order_item(order).target().to_string(), "/orders?search=ORD-1");

        let user = User {
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
            ..Default::default()
        };
        let item = user_item(&user);
        assert_eq!(item.label.as_deref(), Some("Grace Hopper"));
        assert_eq!(item.target().to_string(), "/user-management?search=Grace");
    }
}
