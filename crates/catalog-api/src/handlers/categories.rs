// ============================================================================
// Catalog API - Category Handlers
// File: crates/catalog-api/src/handlers/categories.rs
// ============================================================================
//! `/console/api/agent-categories` handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    Json,
};
use validator::Validate;

use catalog_core::DomainError;

use crate::dto::{CategoryDto, CategoryListDto, CategoryRequest, DeletedDto};
use crate::error::ApiError;
use crate::extractors::Caller;
use crate::response;
use crate::state::AppState;

use super::path_id;

/// GET /console/api/agent-categories
pub async fn list_categories(
    State(state): State<AppState>,
    Caller(ctx): Caller,
) -> Result<Response, ApiError> {
    let categories = state.category_service.list_categories_with_items(&ctx).await?;
    Ok(response::ok(CategoryListDto { categories }))
}

/// POST /console/api/agent-categories
pub async fn create_category(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    req.validate().map_err(DomainError::from)?;

    let category = state.category_service.create_category(&ctx, req.into()).await?;
    Ok(response::created(CategoryDto::from(category)))
}

/// GET /console/api/agent-categories/{category_id}
pub async fn get_category(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path(category_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = path_id(&category_id, "Category")?;
    let view = state.category_service.get_category(&ctx, &id).await?;
    Ok(response::ok(view))
}

/// PUT /console/api/agent-categories/{category_id}
pub async fn update_category(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path(category_id): Path<String>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = path_id(&category_id, "Category")?;
    let Json(req) = payload?;
    req.validate().map_err(DomainError::from)?;

    let category = state.category_service.update_category(&ctx, &id, req.into()).await?;
    Ok(response::ok(CategoryDto::from(category)))
}

/// DELETE /console/api/agent-categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path(category_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = path_id(&category_id, "Category")?;
    state.category_service.delete_category(&ctx, &id).await?;
    Ok(response::ok(DeletedDto { id }))
}
