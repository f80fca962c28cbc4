//! `/console/api/agent-categories/{category_id}/apps` handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    Json,
};

use crate::dto::{AddItemRequest, DeletedDto};
use crate::error::ApiError;
use crate::extractors::Caller;
use crate::response;
use crate::state::AppState;

use super::path_id;

/// POST /console/api/agent-categories/{category_id}/apps
///
/// Responds with the rendered record of the new item.
pub async fn add_item(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path(category_id): Path<String>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let category_id = path_id(&category_id, "Category")?;
    let Json(req) = payload?;

    let item = state.item_service.add_item(&ctx, &category_id, req.into()).await?;
    let rendered = state.item_service.render_item(&ctx, &item).await;
    Ok(response::created(rendered))
}

/// GET /console/api/agent-categories/{category_id}/apps/{item_id}
pub async fn get_item(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path((category_id, item_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let category_id = path_id(&category_id, "Category")?;
    let item_id = path_id(&item_id, "Item")?;

    let rendered = state.item_service.get_item(&ctx, &category_id, &item_id).await?;
    Ok(response::ok(rendered))
}

/// DELETE /console/api/agent-categories/{category_id}/apps/{identifier}
///
/// `identifier` is either the item id or, for app items, the app id.
pub async fn remove_item(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path((category_id, identifier)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let category_id = path_id(&category_id, "Category")?;
    let identifier = path_id(&identifier, "Item")?;

    state.item_service.remove_item(&ctx, &category_id, &identifier).await?;
    Ok(response::ok(DeletedDto { id: identifier }))
}
