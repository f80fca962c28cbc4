//! Category repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Category;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories of a tenant ordered by `(position, created_at)`.
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Category>, DomainError>;
    async fn find_by_id(&self, tenant_id: &Uuid, id: &Uuid) -> Result<Option<Category>, DomainError>;
    async fn find_by_name(&self, tenant_id: &Uuid, name: &str) -> Result<Option<Category>, DomainError>;
    async fn max_position(&self, tenant_id: &Uuid) -> Result<Option<i32>, DomainError>;
    async fn create(&self, category: &Category) -> Result<Category, DomainError>;
    async fn update(&self, category: &Category) -> Result<Category, DomainError>;
    /// Removes the category and all of its items atomically. Returns `false`
    /// when no category matched.
    async fn delete_with_items(&self, tenant_id: &Uuid, id: &Uuid) -> Result<bool, DomainError>;
    /// Storage liveness check.
    async fn ping(&self) -> Result<(), DomainError>;
}
