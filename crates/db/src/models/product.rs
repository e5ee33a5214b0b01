//! Product entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    /// Owning category, if any. Cleared when the category is deleted.
    pub category_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<DbId>,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing product. Absent fields are left untouched;
/// `description` and `category_id` are cleared by an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    /// `Some(None)` detaches the product from its category.
    #[serde(default, deserialize_with = "super::nullable")]
    pub category_id: Option<Option<DbId>>,
    pub is_active: Option<bool>,
}
