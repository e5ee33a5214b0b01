//! Repository for the `categories` table.
//!
//! Reads come in two flavours: the plain row (`find_by_id`, `list`) and the
//! populated form (`find_with_products`, `list_with_products`) which resolves
//! the products that reference each category.

use std::collections::HashMap;

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategoryWithProducts, CreateCategory, UpdateCategory};
use crate::models::product::Product;
use crate::repositories::ProductRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description, is_active) \
             VALUES ($1, $2, COALESCE($3, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories, active or not, in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category and populate its products.
    pub async fn find_with_products(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CategoryWithProducts>, sqlx::Error> {
        let Some(category) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let products = ProductRepo::list_by_category(pool, category.id).await?;
        Ok(Some(CategoryWithProducts { category, products }))
    }

    /// List all categories with their products populated.
    ///
    /// Issues two queries regardless of the number of categories.
    pub async fn list_with_products(
        pool: &PgPool,
    ) -> Result<Vec<CategoryWithProducts>, sqlx::Error> {
        let categories = Self::list(pool).await?;
        let ids: Vec<DbId> = categories.iter().map(|c| c.id).collect();
        let products = ProductRepo::list_by_categories(pool, &ids).await?;
        Ok(attach_products(categories, products))
    }

    /// Update a category. Only non-`None` fields are applied; an explicit
    /// `Some(None)` description clears the column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let description_provided = input.description.is_some();
        let description = input.description.as_ref().and_then(|d| d.as_deref());

        let query = format!(
            "UPDATE categories SET \
                name        = COALESCE($2, name), \
                description = CASE WHEN $3 THEN $4 ELSE description END, \
                is_active   = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(description_provided)
            .bind(description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Set the `is_active` flag, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("UPDATE categories SET is_active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a category. Returns `true` if a row was removed.
    ///
    /// Products that referenced the category are kept; their `category_id`
    /// is cleared by the `ON DELETE SET NULL` rule.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Group products under their owning category, preserving category order.
fn attach_products(
    categories: Vec<Category>,
    products: Vec<Product>,
) -> Vec<CategoryWithProducts> {
    let mut by_category: HashMap<DbId, Vec<Product>> = HashMap::new();
    for product in products {
        if let Some(category_id) = product.category_id {
            by_category.entry(category_id).or_default().push(product);
        }
    }

    categories
        .into_iter()
        .map(|category| {
            let products = by_category.remove(&category.id).unwrap_or_default();
            CategoryWithProducts { category, products }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn category(id: DbId) -> Category {
        Category {
            id,
            name: format!("Category {id}"),
            description: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn product(id: DbId, category_id: Option<DbId>) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: None,
            price: 1.0,
            stock: 1,
            category_id,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn products_grouped_under_owning_category() {
        let result = attach_products(
            vec![category(1), category(2)],
            vec![product(10, Some(1)), product(11, Some(2)), product(12, Some(1))],
        );

        assert_eq!(result.len(), 2);
        let first: Vec<DbId> = result[0].products.iter().map(|p| p.id).collect();
        let second: Vec<DbId> = result[1].products.iter().map(|p| p.id).collect();
        assert_eq!(first, vec![10, 12]);
        assert_eq!(second, vec![11]);
    }

    #[test]
    fn category_without_products_gets_empty_list() {
        let result = attach_products(vec![category(1)], vec![product(10, Some(7))]);
        assert!(result[0].products.is_empty());
    }

    #[test]
    fn category_order_preserved() {
        let result = attach_products(vec![category(3), category(1), category(2)], vec![]);
        let ids: Vec<DbId> = result.iter().map(|c| c.category.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn unlinked_products_dropped() {
        let result = attach_products(vec![category(1)], vec![product(10, None)]);
        assert!(result[0].products.is_empty());
    }
}
