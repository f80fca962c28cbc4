//! # Catalog API
//! 
//! HTTP handlers, request extraction, DTOs, and the console router.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
