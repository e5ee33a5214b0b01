//! Route definitions for products.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// PATCH  /enable/{id}      -> enable
/// PATCH  /disable/{id}     -> disable
/// GET    /category/{id}    -> list_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route(
            "/{id}",
            get(product::get_by_id)
                .put(product::update)
                .delete(product::delete),
        )
        .route("/enable/{id}", patch(product::enable))
        .route("/disable/{id}", patch(product::disable))
        .route("/category/{id}", get(product::list_by_category))
}
