//! Route definitions for categories.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// PATCH  /enable/{id}      -> enable
/// PATCH  /disable/{id}     -> disable
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list).post(category::create))
        .route(
            "/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/enable/{id}", patch(category::enable))
        .route("/disable/{id}", patch(category::disable))
}
