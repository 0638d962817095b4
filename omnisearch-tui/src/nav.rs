//! Page shortcuts and titles.

use omnisearch_core::{EntityKind, Location};

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Location for a numeric page shortcut: 0 is the dashboard, 1-5 follow the
/// entity priority order.
pub fn page_for_index(index: usize) -> Option<Location> {
    match index {
        0 => Some(Location::new(DASHBOARD_PATH)),
        n => EntityKind::ALL
            .get(n - 1)
            .map(|kind| Location::for_entity(*kind, None)),
    }
}

pub fn page_title(location: &Location) -> &'static str {
    match location.entity() {
        Some(kind) => kind.title(),
        None if location.path == DASHBOARD_PATH || location.path == "/" => "Dashboard",
        None => "Page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shortcuts() {
        assert_eq!(page_for_index(0).unwrap().path, DASHBOARD_PATH);
        assert_eq!(page_for_index(1).unwrap().path, "/products");
        assert_eq!(page_for_index(5).unwrap().path, "/user-management");
        assert!(page_for_index(6).is_none());
    }

    #[test]
    fn test_titles() {
        assert_eq!(page_title(&Location::new("/orders")), "Orders");
        assert_eq!(page_title(&Location::new("/")), "Dashboard");
        assert_eq!(page_title(&Location::new("/reports")), "Page");
    }
}
