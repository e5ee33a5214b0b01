//! Repository for the `products` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, stock, category_id, is_active, \
                       created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// Fails with a foreign key violation if `category_id` names a
    /// category that does not exist.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, stock, category_id, is_active) \
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, 0), $5, COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock)
            .bind(input.category_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products, active or not, in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// List the products that belong to one category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE category_id = $1 ORDER BY id");
        sqlx::query_as::<_, Product>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List the products belonging to any of the given categories.
    ///
    /// Used to populate several categories with a single query.
    pub async fn list_by_categories(
        pool: &PgPool,
        category_ids: &[DbId],
    ) -> Result<Vec<Product>, sqlx::Error> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE category_id = ANY($1) ORDER BY id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(category_ids)
            .fetch_all(pool)
            .await
    }

    /// Update a product. Only non-`None` fields are applied.
    ///
    /// `description` and `category_id` use `Option<Option<_>>` so they can be
    /// cleared: the outer `Some` marks the column as provided, the inner value
    /// (possibly `None`) is written as-is.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let description_provided = input.description.is_some();
        let description = input.description.as_ref().and_then(|d| d.as_deref());
        let category_provided = input.category_id.is_some();
        let category_id = input.category_id.flatten();

        let query = format!(
            "UPDATE products SET \
                name        = COALESCE($2, name), \
                description = CASE WHEN $3 THEN $4 ELSE description END, \
                price       = COALESCE($5, price), \
                stock       = COALESCE($6, stock), \
                category_id = CASE WHEN $7 THEN $8 ELSE category_id END, \
                is_active   = COALESCE($9, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(description_provided)
            .bind(description)
            .bind(input.price)
            .bind(input.stock)
            .bind(category_provided)
            .bind(category_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Set the `is_active` flag, returning the updated row.
    ///
    /// Idempotent: setting the flag to its current value still returns the row.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query =
            format!("UPDATE products SET is_active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a product. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
