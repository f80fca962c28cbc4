use std::sync::Arc;
use axum::extract::FromRef;

use catalog_core::repositories::CategoryRepository;
use catalog_core::services::{CategoryService, ItemService};
use catalog_security::JwtService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub item_service: Arc<ItemService>,
    /// Used by the readiness probe to ping storage.
    pub categories: Arc<dyn CategoryRepository>,
    pub jwt: JwtService,
}

impl FromRef<AppState> for JwtService {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}
