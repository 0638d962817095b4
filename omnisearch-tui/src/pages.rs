//! Entity pages reached after navigation.
//!
//! Opening `/orders?search=ord` loads the orders list through the
//! per-entity search endpoint. Failures are returned to the caller, which
//! surfaces them as notifications.

use crate::api_client::{ApiClientError, SearchApi};
use omnisearch_core::display::{category_item, order_item, product_item, supplier_item, user_item};
use omnisearch_core::{
    Category, EntityKind, ItemDisplay, Location, Order, Product, SearchFilters, Supplier, User,
};

#[derive(Debug, Clone, PartialEq)]
pub enum PageItems {
    Products(Vec<Product>),
    Orders(Vec<Order>),
    Suppliers(Vec<Supplier>),
    Categories(Vec<Category>),
    Users(Vec<User>),
}

impl PageItems {
    pub fn kind(&self) -> EntityKind {
        match self {
            PageItems::Products(_) => EntityKind::Products,
            PageItems::Orders(_) => EntityKind::Orders,
            PageItems::Suppliers(_) => EntityKind::Suppliers,
            PageItems::Categories(_) => EntityKind::Categories,
            PageItems::Users(_) => EntityKind::Users,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PageItems::Products(items) => items.len(),
            PageItems::Orders(items) => items.len(),
            PageItems::Suppliers(items) => items.len(),
            PageItems::Categories(items) => items.len(),
            PageItems::Users(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn displays(&self) -> Vec<ItemDisplay> {
        match self {
            PageItems::Products(items) => items.iter().map(product_item).collect(),
            PageItems::Orders(items) => items.iter().map(order_item).collect(),
            PageItems::Suppliers(items) => items.iter().map(supplier_item).collect(),
            PageItems::Categories(items) => items.iter().map(category_item).collect(),
            PageItems::Users(items) => items.iter().map(user_item).collect(),
        }
    }
}

/// A page load to run off the UI timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub kind: EntityKind,
    pub query: String,
    pub filters: SearchFilters,
}

pub async fn load_page(
    api: &dyn SearchApi,
    kind: EntityKind,
    query: &str,
    filters: &SearchFilters,
) -> Result<PageItems, ApiClientError> {
    let items = match kind {
        EntityKind::Products => PageItems::Products(api.search_products(query, filters).await?),
        EntityKind::Orders => PageItems::Orders(api.search_orders(query, filters).await?),
        EntityKind::Suppliers => PageItems::Suppliers(api.search_suppliers(query, filters).await?),
        EntityKind::Categories => {
            PageItems::Categories(api.search_categories(query, filters).await?)
        }
        EntityKind::Users => PageItems::Users(api.search_users(query, filters).await?),
    };
    Ok(items)
}

#[derive(Debug, Clone)]
pub struct PageState {
    pub location: Location,
    pub items: Option<PageItems>,
    pub selected: Option<usize>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl PageState {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            items: None,
            selected: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn entity(&self) -> Option<EntityKind> {
        self.location.entity()
    }

    /// Switch to `location`. Returns the load to run for entity pages.
    pub fn open(&mut self, location: Location, filters: &SearchFilters) -> Option<PageRequest> {
        self.location = location;
        self.items = None;
        self.selected = None;
        self.error = None;
        self.reload(filters)
    }

    pub fn reload(&mut self, filters: &SearchFilters) -> Option<PageRequest> {
        self.generation += 1;
        self.loading = false;
        let kind = self.entity()?;
        self.loading = true;
        // The page searches within its entity only.
        let mut filters = filters.clone();
        filters.entity_type = omnisearch_core::EntityFilter::Only(kind);
        Some(PageRequest {
            generation: self.generation,
            kind,
            query: self.location.search.clone().unwrap_or_default(),
            filters,
        })
    }

    /// Apply a finished load. Loads for a page already left are ignored.
    pub fn finish(
        &mut self,
        generation: u64,
        outcome: Result<PageItems, ApiClientError>,
    ) -> Result<(), ApiClientError> {
        if generation != self.generation {
            return Ok(());
        }
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.selected = if items.is_empty() { None } else { Some(0) };
                self.items = Some(items);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn select_next(&mut self) {
        let len = self.items.as_ref().map(PageItems::len).unwrap_or(0);
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map(|idx| (idx + 1) % len).unwrap_or(0));
    }

    pub fn select_previous(&mut self) {
        let len = self.items.as_ref().map(PageItems::len).unwrap_or(0);
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_entity_page_requests_load() {
        let mut page = PageState::new(Location::new("/dashboard"));
        assert!(page.reload(&SearchFilters::default()).is_none());

        let request = page
            .open(
                Location::parse("/suppliers?search=acme"),
                &SearchFilters::default(),
            )
            .unwrap();
        assert_eq!(request.kind, EntityKind::Suppliers);
        assert_eq!(request.query, "acme");
        assert_eq!(
            request.filters.entity_type,
            omnisearch_core::EntityFilter::Only(EntityKind::Suppliers)
        );
        assert!(page.loading);
    }

    #[test]
    fn test_superseded_load_ignored() {
        let mut page = PageState::new(Location::new("/"));
        let first = page
            .open(Location::new("/orders"), &SearchFilters::default())
            .unwrap();
        let second = page
            .open(Location::new("/products"), &SearchFilters::default())
            .unwrap();
        page.finish(first.generation, Ok(PageItems::Orders(vec![Order::default()])))
            .unwrap();
        assert!(page.items.is_none());
        page.finish(second.generation, Ok(PageItems::Products(Vec::new())))
            .unwrap();
        assert_eq!(page.items.as_ref().map(PageItems::kind), Some(EntityKind::Products));
        assert!(!page.loading);
    }

    #[test]
    fn test_failed_load_surfaces_error() {
        let mut page = PageState::new(Location::new("/"));
        let request = page
            .open(Location::new("/user-management"), &SearchFilters::default())
            .unwrap();
        let result = page.finish(
            request.generation,
            Err(ApiClientError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
        );
        assert!(result.is_err());
        assert!(page.error.is_some());
        assert!(!page.loading);
    }
}
