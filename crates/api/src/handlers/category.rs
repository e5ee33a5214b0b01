//! Handlers for the `/categories` resource.
//!
//! Reads return categories with their products populated. Writes return the
//! bare category row.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::catalog::{validate_description, validate_name};
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::category::{
    Category, CategoryWithProducts, CreateCategory, UpdateCategory,
};
use catalog_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::ApiResponse;
use crate::state::AppState;

fn validate_fields(name: Option<&str>, description: Option<&str>) -> Result<(), AppError> {
    let invalid = |msg| AppError::Core(CoreError::Validation(msg));
    if let Some(name) = name {
        validate_name(name).map_err(invalid)?;
    }
    if let Some(description) = description {
        validate_description(description).map_err(invalid)?;
    }
    Ok(())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CategoryWithProducts>>>> {
    let categories = CategoryRepo::list_with_products(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Categories obtained successfully",
        categories,
    )))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<CategoryWithProducts>>> {
    let category = CategoryRepo::find_with_products(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok("Category obtained successfully", category)))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    validate_fields(Some(&input.name), input.description.as_deref())?;
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Category created successfully", category)),
    ))
}

/// PUT /api/v1/categories/{id}
///
/// Partial update: only fields present in the body are changed.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let description = input.description.as_ref().and_then(|d| d.as_deref());
    validate_fields(input.name.as_deref(), description)?;
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(ApiResponse::ok("Updated successfully", category)))
}

/// PATCH /api/v1/categories/enable/{id}
pub async fn enable(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = CategoryRepo::set_active(&state.pool, id, true)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, "Category enabled");

    Ok(Json(ApiResponse::ok("Category enabled successfully", category)))
}

/// PATCH /api/v1/categories/disable/{id}
pub async fn disable(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = CategoryRepo::set_active(&state.pool, id, false)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, "Category disabled");

    Ok(Json(ApiResponse::ok("Category disabled successfully", category)))
}

/// DELETE /api/v1/categories/{id}
///
/// Products in the category survive with their category cleared.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(Json(ApiResponse::message_only("Deleted successfully")))
}
