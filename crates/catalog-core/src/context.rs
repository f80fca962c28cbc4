//! Request-scoped identity context

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Role of the acting user inside the current tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantRole {
    Owner,
    Admin,
    Editor,
    Normal,
    DatasetOperator,
}

impl TenantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantRole::Owner => "owner",
            TenantRole::Admin => "admin",
            TenantRole::Editor => "editor",
            TenantRole::Normal => "normal",
            TenantRole::DatasetOperator => "dataset_operator",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(TenantRole::Owner),
            "admin" => Some(TenantRole::Admin),
            "editor" => Some(TenantRole::Editor),
            "normal" => Some(TenantRole::Normal),
            "dataset_operator" => Some(TenantRole::DatasetOperator),
            _ => None,
        }
    }

    pub fn is_editing_role(&self) -> bool {
        matches!(self, TenantRole::Owner | TenantRole::Admin | TenantRole::Editor)
    }

    pub fn is_privileged_role(&self) -> bool {
        matches!(self, TenantRole::Owner | TenantRole::Admin)
    }
}

/// Identity of the caller, passed explicitly into every service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub tenant_id: Uuid,
    pub user_id: Uuid,
    pub role: TenantRole,
}

impl RequestContext {
    pub fn new(tenant_id: Uuid, user_id: Uuid, role: TenantRole) -> Self {
        Self { tenant_id, user_id, role }
    }

    pub fn is_editor(&self) -> bool {
        self.role.is_editing_role()
    }

    pub fn is_admin_or_owner(&self) -> bool {
        self.role.is_privileged_role()
    }

    pub fn require_editor(&self) -> Result<(), DomainError> {
        if self.is_editor() {
            Ok(())
        } else {
            Err(DomainError::PermissionDenied)
        }
    }
}
