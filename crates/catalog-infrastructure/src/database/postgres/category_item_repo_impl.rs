// ============================================================================
// Catalog Infrastructure - PostgreSQL Category Item Repository
// File: crates/catalog-infrastructure/src/database/postgres/category_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::{info, error};
use chrono::{DateTime, Utc};

use catalog_core::domain::{CategoryItem, ItemContent, ItemIcon, ItemType};
use catalog_core::error::DomainError;
use catalog_core::repositories::CategoryItemRepository;

use super::{is_unique_violation, storage_error};

pub struct PgCategoryItemRepository {
    pool: PgPool,
}

impl PgCategoryItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct CategoryItemRow {
    pub id: Uuid,
    pub category_id: Uuid,
    pub item_type: String,
    pub app_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub icon_type: Option<String>,
    pub icon: Option<String>,
    pub icon_background: Option<String>,
    pub markdown_content: Option<String>,
    pub url: Option<String>,
    pub position: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<CategoryItemRow> for CategoryItem {
    type Error = DomainError;

    fn try_from(row: CategoryItemRow) -> Result<Self, Self::Error> {
        let corrupt = |field: &str| {
            DomainError::DatabaseError(format!(
                "Item {} of type {} has no {}",
                row.id, row.item_type, field
            ))
        };

        let content = match ItemType::from_str(&row.item_type) {
            Some(ItemType::App) => ItemContent::App {
                app_id: row.app_id.ok_or_else(|| corrupt("app_id"))?,
            },
            Some(ItemType::Markdown) => ItemContent::Markdown {
                markdown_content: row.markdown_content.ok_or_else(|| corrupt("markdown_content"))?,
            },
            Some(ItemType::Url) => ItemContent::Url {
                url: row.url.ok_or_else(|| corrupt("url"))?,
            },
            None => {
                return Err(DomainError::DatabaseError(format!(
                    "Item {} has unknown type {}",
                    row.id, row.item_type
                )))
            }
        };

        Ok(CategoryItem {
            id: row.id,
            category_id: row.category_id,
            name: row.name,
            description: row.description,
            icon: ItemIcon {
                icon_type: row.icon_type,
                icon: row.icon,
                icon_background: row.icon_background,
            },
            content,
            position: row.position,
            created_by: row.created_by,
            created_at: row.created_at,
        })
    }
}

fn into_items(rows: Vec<CategoryItemRow>) -> Result<Vec<CategoryItem>, DomainError> {
    rows.into_iter().map(CategoryItem::try_from).collect()
}

#[async_trait]
impl CategoryItemRepository for PgCategoryItemRepository {
    async fn list_by_category(&self, category_id: &Uuid) -> Result<Vec<CategoryItem>, DomainError> {
        let rows: Vec<CategoryItemRow> = sqlx::query_as(
            r#"
            SELECT
                id, category_id, item_type, app_id, name, description,
                icon_type, icon, icon_background, markdown_content, url,
                position, created_by, created_at
            FROM agent_category_items
            WHERE category_id = $1
            ORDER BY position ASC, created_at ASC
            "#
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error("listing category items"))?;

        into_items(rows)
    }

    async fn find_by_id(&self, category_id: &Uuid, item_id: &Uuid) -> Result<Option<CategoryItem>, DomainError> {
        let row: Option<CategoryItemRow> = sqlx::query_as(
            r#"
            SELECT
                id, category_id, item_type, app_id, name, description,
                icon_type, icon, icon_background, markdown_content, url,
                position, created_by, created_at
            FROM agent_category_items
            WHERE id = $1 AND category_id = $2
            "#
        )
        .bind(item_id)
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error("finding category item by id"))?;

        row.map(CategoryItem::try_from).transpose()
    }

    async fn find_app_item(&self, category_id: &Uuid, app_id: &Uuid) -> Result<Option<CategoryItem>, DomainError> {
        let row: Option<CategoryItemRow> = sqlx::query_as(
            r#"
            SELECT
                id, category_id, item_type, app_id, name, description,
                icon_type, icon, icon_background, markdown_content, url,
                position, created_by, created_at
            FROM agent_category_items
            WHERE category_id = $1 AND app_id = $2 AND item_type = 'app'
            "#
        )
        .bind(category_id)
        .bind(app_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error("finding category item by app"))?;

        row.map(CategoryItem::try_from).transpose()
    }

    async fn max_position(&self, category_id: &Uuid) -> Result<Option<i32>, DomainError> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(position) FROM agent_category_items WHERE category_id = $1"
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error("reading max item position"))
    }

    async fn create(&self, item: &CategoryItem) -> Result<CategoryItem, DomainError> {
        let (app_id, markdown_content, url) = match &item.content {
            ItemContent::App { app_id } => (Some(*app_id), None, None),
            ItemContent::Markdown { markdown_content } => (None, Some(markdown_content.as_str()), None),
            ItemContent::Url { url } => (None, None, Some(url.as_str())),
        };

        let row: CategoryItemRow = sqlx::query_as(
            r#"
            INSERT INTO agent_category_items (
                id, category_id, item_type, app_id, name, description,
                icon_type, icon, icon_background, markdown_content, url,
                position, created_by, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING
                id, category_id, item_type, app_id, name, description,
                icon_type, icon, icon_background, markdown_content, url,
                position, created_by, created_at
            "#
        )
        .bind(item.id)
        .bind(item.category_id)
        .bind(item.item_type().as_str())
        .bind(app_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.icon.icon_type)
        .bind(&item.icon.icon)
        .bind(&item.icon.icon_background)
        .bind(markdown_content)
        .bind(url)
        .bind(item.position)
        .bind(item.created_by)
        .bind(item.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| match app_id {
            Some(app_id) if is_unique_violation(&e) => DomainError::ApplicationAlreadyInCategory(app_id),
            _ => {
                error!("Database error creating category item: {}", e);
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        info!("Category item created successfully: {}", row.id);
        row.try_into()
    }

    async fn delete(&self, item_id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM agent_category_items WHERE id = $1")
            .bind(item_id)
            .execute(&self.pool)
            .await
            .map_err(storage_error("deleting category item"))?;

        Ok(result.rows_affected() > 0)
    }
}
