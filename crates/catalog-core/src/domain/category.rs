// ============================================================================
// Catalog Core - Category Entity
// File: crates/catalog-core/src/domain/category.rs
// Description: Tenant-scoped, ordered agent category
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Agent category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Category {
    pub id: Uuid,
    pub tenant_id: Uuid,
    
    #[validate(length(min = 1, max = 255, message = "Category name must be between 1 and 255 characters"))]
    pub name: String,
    
    pub description: Option<String>,
    pub position: i32,
    
    // Audit fields
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_by: Uuid,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        tenant_id: Uuid,
        name: String,
        description: Option<String>,
        position: i32,
        created_by: Uuid,
    ) -> Result<Self, validator::ValidationErrors> {
        let now = Utc::now();
        let category = Self {
            id: Uuid::new_v4(),
            tenant_id,
            name: name.trim().to_string(),
            description: catalog_shared::utils::non_blank(description),
            position,
            created_by,
            created_at: now,
            updated_by: created_by,
            updated_at: now,
        };

        category.validate()?;
        Ok(category)
    }

    /// Applies an edit. The description is replaced as given; the position is
    /// only touched when one is provided.
    pub fn apply_update(
        &mut self,
        name: String,
        description: Option<String>,
        position: Option<i32>,
        updated_by: Uuid,
    ) -> Result<(), validator::ValidationErrors> {
        let mut updated = self.clone();
        updated.name = name.trim().to_string();
        updated.description = catalog_shared::utils::non_blank(description);
        if let Some(position) = position {
            updated.position = position;
        }
        updated.updated_by = updated_by;
        updated.updated_at = Utc::now();

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
