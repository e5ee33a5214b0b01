//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::catalog::{validate_description, validate_name, validate_price, validate_stock};
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, Product, UpdateProduct};
use catalog_db::repositories::{CategoryRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateProduct) -> Result<(), AppError> {
    validate_name(&input.name).map_err(invalid)?;
    validate_optional(input.description.as_deref(), input.price, input.stock)
}

fn validate_update(input: &UpdateProduct) -> Result<(), AppError> {
    if let Some(name) = &input.name {
        validate_name(name).map_err(invalid)?;
    }
    let description = input.description.as_ref().and_then(|d| d.as_deref());
    validate_optional(description, input.price, input.stock)
}

fn validate_optional(
    description: Option<&str>,
    price: Option<f64>,
    stock: Option<i32>,
) -> Result<(), AppError> {
    if let Some(description) = description {
        validate_description(description).map_err(invalid)?;
    }
    if let Some(price) = price {
        validate_price(price).map_err(invalid)?;
    }
    if let Some(stock) = stock {
        validate_stock(stock).map_err(invalid)?;
    }
    Ok(())
}

fn invalid(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok("Products obtained successfully", products)))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok("Product obtained successfully", product)))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    validate_create(&input)?;
    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(
        product_id = product.id,
        category_id = ?product.category_id,
        "Product created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Product created successfully", product)),
    ))
}

/// GET /api/v1/products/category/{id}
///
/// List the products of one category. 404 when the category itself is missing;
/// an existing category with no products yields an empty list.
pub async fn list_by_category(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let category = CategoryRepo::find_with_products(&state.pool, category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))?;
    Ok(Json(ApiResponse::ok(
        "Products obtained successfully",
        category.products,
    )))
}

/// PUT /api/v1/products/{id}
///
/// Partial update: only fields present in the body are changed.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProduct>,
) -> AppResult<Json<ApiResponse<Product>>> {
    validate_update(&input)?;
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        product_id = id,
        category_id = ?product.category_id,
        "Product updated",
    );

    Ok(Json(ApiResponse::ok("Updated successfully", product)))
}

/// PATCH /api/v1/products/enable/{id}
pub async fn enable(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepo::set_active(&state.pool, id, true)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(product_id = id, "Product enabled");

    Ok(Json(ApiResponse::ok("Product enabled successfully", product)))
}

/// PATCH /api/v1/products/disable/{id}
pub async fn disable(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepo::set_active(&state.pool, id, false)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(product_id = id, "Product disabled");

    Ok(Json(ApiResponse::ok("Product disabled successfully", product)))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(Json(ApiResponse::message_only("Deleted successfully")))
}
