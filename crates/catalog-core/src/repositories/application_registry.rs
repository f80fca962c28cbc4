//! Application registry trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Application;
use crate::error::DomainError;

/// Read-only lookup into the external application registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRegistry: Send + Sync {
    /// Finds an application of `tenant_id` regardless of its status.
    async fn find_application(&self, id: &Uuid, tenant_id: &Uuid) -> Result<Option<Application>, DomainError>;
}
