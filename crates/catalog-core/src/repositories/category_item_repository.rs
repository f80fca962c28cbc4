//! Category item repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::CategoryItem;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryItemRepository: Send + Sync {
    /// Items of a category ordered by `(position, created_at)`.
    async fn list_by_category(&self, category_id: &Uuid) -> Result<Vec<CategoryItem>, DomainError>;
    async fn find_by_id(&self, category_id: &Uuid, item_id: &Uuid) -> Result<Option<CategoryItem>, DomainError>;
    /// The app item of `category_id` referencing `app_id`, if any.
    async fn find_app_item(&self, category_id: &Uuid, app_id: &Uuid) -> Result<Option<CategoryItem>, DomainError>;
    async fn max_position(&self, category_id: &Uuid) -> Result<Option<i32>, DomainError>;
    async fn create(&self, item: &CategoryItem) -> Result<CategoryItem, DomainError>;
    async fn delete(&self, item_id: &Uuid) -> Result<bool, DomainError>;
}
