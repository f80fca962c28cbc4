// ============================================================================
// Catalog Infrastructure - PostgreSQL Category Repository
// File: crates/catalog-infrastructure/src/database/postgres/category_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::{info, error};
use chrono::{DateTime, Utc};

use catalog_core::domain::Category;
use catalog_core::error::DomainError;
use catalog_core::repositories::CategoryRepository;

use super::{is_unique_violation, storage_error};

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct CategoryRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_by: Uuid,
    pub updated_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            tenant_id: row.tenant_id,
            name: row.name,
            description: row.description,
            position: row.position,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_by: row.updated_by,
            updated_at: row.updated_at,
        }
    }
}

fn name_conflict(category: &Category) -> impl Fn(sqlx::Error) -> DomainError + '_ {
    move |e: sqlx::Error| {
        if is_unique_violation(&e) {
            DomainError::CategoryNameAlreadyExists(category.name.clone())
        } else {
            error!("Database error writing category {}: {}", category.id, e);
            DomainError::DatabaseError(e.to_string())
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Category>, DomainError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT
                id, tenant_id, name, description, position,
                created_by, created_at, updated_by, updated_at
            FROM agent_categories
            WHERE tenant_id = $1
            ORDER BY position ASC, created_at ASC
            "#
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error("listing categories"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, tenant_id: &Uuid, id: &Uuid) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            SELECT
                id, tenant_id, name, description, position,
                created_by, created_at, updated_by, updated_at
            FROM agent_categories
            WHERE id = $1 AND tenant_id = $2
            "#
        )
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error("finding category by id"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_name(&self, tenant_id: &Uuid, name: &str) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            SELECT
                id, tenant_id, name, description, position,
                created_by, created_at, updated_by, updated_at
            FROM agent_categories
            WHERE tenant_id = $1 AND name = $2
            "#
        )
        .bind(tenant_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error("finding category by name"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn max_position(&self, tenant_id: &Uuid) -> Result<Option<i32>, DomainError> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(position) FROM agent_categories WHERE tenant_id = $1"
        )
        .bind(tenant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error("reading max category position"))
    }

    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        info!("Creating category: {}", category.name);

        let row: CategoryRow = sqlx::query_as(
            r#"
            INSERT INTO agent_categories (
                id, tenant_id, name, description, position,
                created_by, created_at, updated_by, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, tenant_id, name, description, position,
                created_by, created_at, updated_by, updated_at
            "#
        )
        .bind(category.id)
        .bind(category.tenant_id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.position)
        .bind(category.created_by)
        .bind(category.created_at)
        .bind(category.updated_by)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(name_conflict(category))?;

        info!("Category created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            UPDATE agent_categories
            SET
                name = $3,
                description = $4,
                position = $5,
                updated_by = $6,
                updated_at = $7
            WHERE id = $1 AND tenant_id = $2
            RETURNING
                id, tenant_id, name, description, position,
                created_by, created_at, updated_by, updated_at
            "#
        )
        .bind(category.id)
        .bind(category.tenant_id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.position)
        .bind(category.updated_by)
        .bind(category.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(name_conflict(category))?;

        row.map(Into::into).ok_or(DomainError::CategoryNotFound(category.id))
    }

    async fn delete_with_items(&self, tenant_id: &Uuid, id: &Uuid) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("starting category delete"))?;

        let items = sqlx::query("DELETE FROM agent_category_items WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(storage_error("deleting category items"))?;

        let deleted = sqlx::query("DELETE FROM agent_categories WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(&mut *tx)
            .await
            .map_err(storage_error("deleting category"))?;

        if deleted.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(storage_error("rolling back category delete"))?;
            return Ok(false);
        }

        tx.commit()
            .await
            .map_err(storage_error("committing category delete"))?;

        info!(
            "Category {} deleted with {} item(s)",
            id,
            items.rows_affected()
        );
        Ok(true)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(storage_error("pinging database"))?;
        Ok(())
    }
}
