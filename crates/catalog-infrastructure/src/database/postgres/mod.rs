//! PostgreSQL repository implementations

pub mod category_repo_impl;
pub mod category_item_repo_impl;
pub mod application_registry_impl;

pub use category_repo_impl::PgCategoryRepository;
pub use category_item_repo_impl::PgCategoryItemRepository;
pub use application_registry_impl::PgApplicationRegistry;

use catalog_core::error::DomainError;
use tracing::error;

/// Maps a driver error to a storage failure, logging the operation.
pub(crate) fn storage_error(operation: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e: sqlx::Error| {
        error!("Database error {}: {}", operation, e);
        DomainError::DatabaseError(e.to_string())
    }
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
