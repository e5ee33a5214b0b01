//! Category entity model and DTOs.
//!
//! A category owns zero or more products through `products.category_id`.
//! Reads return [`CategoryWithProducts`], the category with that relation
//! resolved.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::product::Product;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A category together with the products that reference it.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<Product>,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing category. Absent fields are left untouched;
/// `description` is cleared by an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}
