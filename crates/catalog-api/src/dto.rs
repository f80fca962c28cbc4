//! Request and response bodies of the console API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use catalog_core::domain::{Category, CategoryView};
use catalog_core::services::{CategoryInput, NewItemInput};
use catalog_shared::constants::MAX_NAME_LENGTH;

/// Body of `POST` and `PUT /console/api/agent-categories`.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[serde(default)]
    #[validate(length(max = MAX_NAME_LENGTH, message = "Category name must be at most 255 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub position: Option<i32>,
}

impl From<CategoryRequest> for CategoryInput {
    fn from(req: CategoryRequest) -> Self {
        CategoryInput {
            name: req.name,
            description: req.description,
            position: req.position,
        }
    }
}

/// Body of `POST /console/api/agent-categories/{category_id}/apps`.
#[derive(Debug, Default, Deserialize)]
pub struct AddItemRequest {
    pub item_type: Option<String>,
    pub app_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon_type: Option<String>,
    pub icon: Option<String>,
    pub icon_background: Option<String>,
    pub markdown_content: Option<String>,
    pub url: Option<String>,
    pub position: Option<i32>,
}

impl From<AddItemRequest> for NewItemInput {
    fn from(req: AddItemRequest) -> Self {
        NewItemInput {
            item_type: req.item_type,
            app_id: req.app_id,
            name: req.name,
            description: req.description,
            icon_type: req.icon_type,
            icon: req.icon,
            icon_background: req.icon_background,
            markdown_content: req.markdown_content,
            url: req.url,
            position: req.position,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            position: category.position,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Body of `GET /console/api/agent-categories`.
#[derive(Debug, Serialize)]
pub struct CategoryListDto {
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Serialize)]
pub struct DeletedDto {
    pub id: Uuid,
}
