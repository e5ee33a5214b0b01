pub mod category;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                    list, create
/// /products/{id}               get, update, delete
/// /products/enable/{id}        enable (PATCH)
/// /products/disable/{id}       disable (PATCH)
/// /products/category/{id}      products of one category
///
/// /categories                  list, create
/// /categories/{id}             get, update, delete
/// /categories/enable/{id}      enable (PATCH)
/// /categories/disable/{id}     disable (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product::router())
        .nest("/categories", category::router())
}
