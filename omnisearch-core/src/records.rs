//! Entity records as returned by the backend.
//!
//! Records are trusted as returned: every field is optional, unknown fields
//! are ignored, and nothing is validated or normalized locally.

use serde::{Deserialize, Serialize};

/// Backend identifiers are numeric or string depending on the table.
pub type RecordId = serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub reorder_level: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: Option<RecordId>,
    pub order_number: Option<String>,
    pub total_amount: Option<f64>,
    pub order_date: Option<String>,
    pub status: Option<String>,
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub product_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<RecordId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl User {
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.to_string()),
            (None, Some(last)) => Some(last.to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_tolerates_partial_payload() {
        let product: Product =
            serde_json::from_str(r#"{"name":"Laptop","reorderLevel":3,"supplierId":9}"#).unwrap();
        assert_eq!(product.name.as_deref(), Some("Laptop"));
        assert_eq!(product.reorder_level, Some(3));
        assert_eq!(product.quantity, None);
    }

    #[test]
    fn test_user_full_name() {
        let user = User {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            ..Default::default()
        };
        assert_eq!(user.full_name().as_deref(), Some("Ada Lovelace"));
        assert_eq!(User::default().full_name(), None);
    }
}
