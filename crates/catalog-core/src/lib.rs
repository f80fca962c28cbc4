//! # Catalog Core
//! 
//! Domain entities, services, and repository traits for agent categories.

pub mod context;
pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use context::{RequestContext, TenantRole};
pub use domain::*;
pub use error::{DomainError, ErrorKind};
