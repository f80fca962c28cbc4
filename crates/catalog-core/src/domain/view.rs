//! Display projections returned to console clients

use catalog_shared::constants::{DEFAULT_ICON_BACKGROUND, DEFAULT_ICON_TYPE, MISSING_APP_DESCRIPTION};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Application, Category, CategoryItem, ItemContent, ItemType};

/// Flat display record of a category item.
///
/// Fields that do not apply to the item's variant are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedItem {
    pub id: Uuid,
    pub item_type: ItemType,
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    pub mode: Option<String>,
    pub icon_type: Option<String>,
    pub icon: Option<String>,
    pub icon_background: Option<String>,
    pub icon_url: Option<String>,
    pub site_code: Option<String>,
    pub app_id: Option<Uuid>,
    pub markdown_content: Option<String>,
    pub url: Option<String>,
}

impl RenderedItem {
    fn base(item: &CategoryItem) -> Self {
        let item_type = item.item_type();
        Self {
            id: item.id,
            item_type,
            name: item.name.clone(),
            description: item.description.clone(),
            position: item.position,
            mode: None,
            icon_type: Some(
                item.icon
                    .icon_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ICON_TYPE.to_string()),
            ),
            icon: Some(
                item.icon
                    .icon
                    .clone()
                    .unwrap_or_else(|| item_type.default_icon().to_string()),
            ),
            icon_background: item.icon.icon_background.clone(),
            icon_url: None,
            site_code: None,
            app_id: item.app_id(),
            markdown_content: None,
            url: None,
        }
    }

    /// Markdown and url items render from their own stored fields.
    pub fn from_static(item: &CategoryItem) -> Self {
        let mut rendered = Self::base(item);
        match &item.content {
            ItemContent::Markdown { markdown_content } => {
                rendered.markdown_content = Some(markdown_content.clone());
            }
            ItemContent::Url { url } => {
                rendered.url = Some(url.clone());
            }
            ItemContent::App { .. } => {}
        }
        rendered
    }

    /// App items render from the live application record.
    pub fn from_application(item: &CategoryItem, app: &Application) -> Self {
        Self {
            name: app.name.clone(),
            description: app.description.clone(),
            mode: Some(app.mode.clone()),
            icon_type: app.icon_type.clone(),
            icon: app.icon.clone(),
            icon_background: app.icon_background.clone(),
            icon_url: app.icon_url.clone(),
            site_code: app.site_code.clone(),
            app_id: Some(app.id),
            ..Self::base(item)
        }
    }

    /// Placeholder for an app item whose application no longer exists.
    pub fn missing_app(item: &CategoryItem, app_id: Uuid) -> Self {
        Self {
            name: format!("App {}", app_id),
            description: Some(MISSING_APP_DESCRIPTION.to_string()),
            icon_type: Some(DEFAULT_ICON_TYPE.to_string()),
            icon: Some(ItemType::App.default_icon().to_string()),
            icon_background: Some(DEFAULT_ICON_BACKGROUND.to_string()),
            app_id: Some(app_id),
            ..Self::base(item)
        }
    }

    /// Minimal record used when an item could not be resolved at all.
    pub fn fallback(item: &CategoryItem) -> Self {
        let name = match item.app_id() {
            Some(app_id) if item.name.is_empty() => format!("App {}", app_id),
            _ => item.name.clone(),
        };
        Self {
            name,
            icon_type: Some(DEFAULT_ICON_TYPE.to_string()),
            icon: Some(item.item_type().default_icon().to_string()),
            icon_background: Some(DEFAULT_ICON_BACKGROUND.to_string()),
            ..Self::base(item)
        }
    }
}

/// A category together with its rendered items.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    /// Console clients read the item list from the `apps` key.
    #[serde(rename = "apps")]
    pub items: Vec<RenderedItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryView {
    pub fn new(category: Category, items: Vec<RenderedItem>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            position: category.position,
            items,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
