// ============================================================================
// Catalog Core - Category Item Entity
// File: crates/catalog-core/src/domain/category_item.rs
// Description: Positioned entry of a category (app reference, markdown, url)
// ============================================================================

use catalog_shared::constants::{
    DEFAULT_APP_ICON, DEFAULT_MARKDOWN_ICON, DEFAULT_URL_ICON, MAX_ICON_LENGTH, MAX_NAME_LENGTH,
    MAX_URL_LENGTH,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateUrl;

use crate::error::DomainError;

/// Item type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    App,
    Markdown,
    Url,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::App => "app",
            ItemType::Markdown => "markdown",
            ItemType::Url => "url",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "app" => Some(ItemType::App),
            "markdown" => Some(ItemType::Markdown),
            "url" => Some(ItemType::Url),
            _ => None,
        }
    }

    pub fn default_icon(&self) -> &'static str {
        match self {
            ItemType::App => DEFAULT_APP_ICON,
            ItemType::Markdown => DEFAULT_MARKDOWN_ICON,
            ItemType::Url => DEFAULT_URL_ICON,
        }
    }
}

/// Variant-specific payload. Each item holds exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "item_type", rename_all = "snake_case")]
pub enum ItemContent {
    App { app_id: Uuid },
    Markdown { markdown_content: String },
    Url { url: String },
}

impl ItemContent {
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemContent::App { .. } => ItemType::App,
            ItemContent::Markdown { .. } => ItemType::Markdown,
            ItemContent::Url { .. } => ItemType::Url,
        }
    }

    pub fn app_id(&self) -> Option<Uuid> {
        match self {
            ItemContent::App { app_id } => Some(*app_id),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        match self {
            ItemContent::App { .. } => Ok(()),
            ItemContent::Markdown { markdown_content } => {
                if markdown_content.trim().is_empty() {
                    return Err(DomainError::MissingField("markdown_content"));
                }
                Ok(())
            }
            ItemContent::Url { url } => {
                if url.trim().is_empty() {
                    return Err(DomainError::MissingField("url"));
                }
                if url.len() as u64 > MAX_URL_LENGTH || !url.validate_url() {
                    return Err(DomainError::ValidationError(format!("Invalid url: {}", url)));
                }
                Ok(())
            }
        }
    }
}

/// Icon metadata as chosen in the console icon picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIcon {
    pub icon_type: Option<String>,
    pub icon: Option<String>,
    pub icon_background: Option<String>,
}

impl ItemIcon {
    pub fn new(
        icon_type: Option<String>,
        icon: Option<String>,
        icon_background: Option<String>,
    ) -> Self {
        use catalog_shared::utils::non_blank;

        Self {
            icon_type: non_blank(icon_type),
            icon: non_blank(icon),
            icon_background: non_blank(icon_background),
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("icon_type", &self.icon_type),
            ("icon", &self.icon),
            ("icon_background", &self.icon_background),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if value.chars().count() as u64 > MAX_ICON_LENGTH {
                    return Err(DomainError::ValidationError(format!(
                        "{} must be at most {} characters",
                        field, MAX_ICON_LENGTH
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Category item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub icon: ItemIcon,
    #[serde(flatten)]
    pub content: ItemContent,
    pub position: i32,
    
    // Audit fields
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl CategoryItem {
    pub fn new(
        category_id: Uuid,
        name: String,
        description: Option<String>,
        icon: ItemIcon,
        content: ItemContent,
        position: i32,
        created_by: Uuid,
    ) -> Result<Self, DomainError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if name.chars().count() as u64 > MAX_NAME_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "Item name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }
        icon.validate()?;
        content.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            category_id,
            name,
            description: catalog_shared::utils::non_blank(description),
            icon,
            content,
            position,
            created_by,
            created_at: Utc::now(),
        })
    }

    pub fn item_type(&self) -> ItemType {
        self.content.item_type()
    }

    pub fn app_id(&self) -> Option<Uuid> {
        self.content.app_id()
    }

    /// True for app items pointing at `app_id`.
    pub fn references_app(&self, app_id: &Uuid) -> bool {
        self.app_id().as_ref() == Some(app_id)
    }
}
