//! Domain errors

use thiserror::Error;
use uuid::Uuid;

/// Coarse classification of a [`DomainError`], used at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Permission,
    Internal,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Category not found")]
    CategoryNotFound(Uuid),
    
    #[error("Category name already exists")]
    CategoryNameAlreadyExists(String),
    
    #[error("Item not found in this category")]
    ItemNotFound(String),
    
    #[error("App not found")]
    ApplicationNotFound(Uuid),
    
    #[error("App already exists in this category")]
    ApplicationAlreadyInCategory(Uuid),
    
    #[error("Unsupported item type: {0}")]
    UnsupportedItemType(String),
    
    #[error("{0} is required")]
    MissingField(&'static str),
    
    #[error("Validation error: {0}")]
    ValidationError(String),
    
    #[error("Permission denied")]
    PermissionDenied,
    
    #[error("Database error: {0}")]
    DatabaseError(String),

}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::UnsupportedItemType(_)
            | DomainError::MissingField(_)
            | DomainError::ValidationError(_) => ErrorKind::Validation,
            DomainError::CategoryNameAlreadyExists(_)
            | DomainError::ApplicationAlreadyInCategory(_) => ErrorKind::Conflict,
            DomainError::CategoryNotFound(_)
            | DomainError::ItemNotFound(_)
            | DomainError::ApplicationNotFound(_) => ErrorKind::NotFound,
            DomainError::PermissionDenied => ErrorKind::Permission,
            DomainError::DatabaseError(_) => ErrorKind::Internal,
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
