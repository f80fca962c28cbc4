// ============================================================================
// Catalog Infrastructure - PostgreSQL Application Registry
// File: crates/catalog-infrastructure/src/database/postgres/application_registry_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;

use catalog_core::domain::Application;
use catalog_core::error::DomainError;
use catalog_core::repositories::ApplicationRegistry;

use super::storage_error;

/// Reads applications from the registry's `apps` table.
pub struct PgApplicationRegistry {
    pool: PgPool,
}

impl PgApplicationRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct ApplicationRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub mode: String,
    pub icon_type: Option<String>,
    pub icon: Option<String>,
    pub icon_background: Option<String>,
    pub icon_url: Option<String>,
    pub site_code: Option<String>,
    pub status: String,
}

impl From<ApplicationRow> for Application {
    fn from(row: ApplicationRow) -> Self {
        Application {
            id: row.id,
            tenant_id: row.tenant_id,
            name: row.name,
            description: row.description,
            mode: row.mode,
            icon_type: row.icon_type,
            icon: row.icon,
            icon_background: row.icon_background,
            icon_url: row.icon_url,
            site_code: row.site_code,
            status: row.status,
        }
    }
}

#[async_trait]
impl ApplicationRegistry for PgApplicationRegistry {
    async fn find_application(&self, id: &Uuid, tenant_id: &Uuid) -> Result<Option<Application>, DomainError> {
        let row: Option<ApplicationRow> = sqlx::query_as(
            r#"
            SELECT
                id, tenant_id, name, description, mode,
                icon_type, icon, icon_background, icon_url,
                site_code, status
            FROM apps
            WHERE id = $1 AND tenant_id = $2
            "#
        )
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error("finding application"))?;

        Ok(row.map(|r| r.into()))
    }
}
