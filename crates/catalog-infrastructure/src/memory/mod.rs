//! In-memory implementation of every catalog port.
//!
//! Backs the `memory` storage backend and the service tests. All state sits
//! behind one lock, so each mutation is atomic; rows are kept in insertion
//! order, which makes creation order the stable tie-break when sorting by
//! position.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use catalog_core::domain::{Application, Category, CategoryItem};
use catalog_core::error::DomainError;
use catalog_core::repositories::{ApplicationRegistry, CategoryItemRepository, CategoryRepository};

#[derive(Default)]
struct CatalogState {
    categories: Vec<Category>,
    items: Vec<CategoryItem>,
    applications: HashMap<Uuid, Application>,
}

#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) an application in the registry view.
    pub async fn insert_application(&self, application: Application) {
        self.state
            .write()
            .await
            .applications
            .insert(application.id, application);
    }

    pub async fn remove_application(&self, id: &Uuid) -> Option<Application> {
        self.state.write().await.applications.remove(id)
    }

    pub async fn item_count(&self, category_id: &Uuid) -> usize {
        self.state
            .read()
            .await
            .items
            .iter()
            .filter(|item| &item.category_id == category_id)
            .count()
    }
}

fn sorted<T: Clone>(rows: Vec<&T>, key: impl Fn(&T) -> (i32, chrono::DateTime<chrono::Utc>)) -> Vec<T> {
    let mut rows: Vec<T> = rows.into_iter().cloned().collect();
    rows.sort_by_key(|row| key(row));
    rows
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Category>, DomainError> {
        let state = self.state.read().await;
        let rows = state
            .categories
            .iter()
            .filter(|c| &c.tenant_id == tenant_id)
            .collect();
        Ok(sorted(rows, |c: &Category| (c.position, c.created_at)))
    }

    async fn find_by_id(&self, tenant_id: &Uuid, id: &Uuid) -> Result<Option<Category>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .categories
            .iter()
            .find(|c| &c.id == id && &c.tenant_id == tenant_id)
            .cloned())
    }

    async fn find_by_name(&self, tenant_id: &Uuid, name: &str) -> Result<Option<Category>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .categories
            .iter()
            .find(|c| &c.tenant_id == tenant_id && c.name == name)
            .cloned())
    }

    async fn max_position(&self, tenant_id: &Uuid) -> Result<Option<i32>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .categories
            .iter()
            .filter(|c| &c.tenant_id == tenant_id)
            .map(|c| c.position)
            .max())
    }

    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        let mut state = self.state.write().await;
        if state
            .categories
            .iter()
            .any(|c| c.tenant_id == category.tenant_id && c.name == category.name)
        {
            return Err(DomainError::CategoryNameAlreadyExists(category.name.clone()));
        }
        state.categories.push(category.clone());
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        let mut state = self.state.write().await;
        if state.categories.iter().any(|c| {
            c.tenant_id == category.tenant_id && c.name == category.name && c.id != category.id
        }) {
            return Err(DomainError::CategoryNameAlreadyExists(category.name.clone()));
        }

        let existing = state
            .categories
            .iter_mut()
            .find(|c| c.id == category.id && c.tenant_id == category.tenant_id)
            .ok_or(DomainError::CategoryNotFound(category.id))?;
        *existing = category.clone();
        Ok(category.clone())
    }

    async fn delete_with_items(&self, tenant_id: &Uuid, id: &Uuid) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let before = state.categories.len();
        state
            .categories
            .retain(|c| !(&c.id == id && &c.tenant_id == tenant_id));
        if state.categories.len() == before {
            return Ok(false);
        }
        state.items.retain(|item| &item.category_id != id);
        Ok(true)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[async_trait]
impl CategoryItemRepository for InMemoryCatalog {
    async fn list_by_category(&self, category_id: &Uuid) -> Result<Vec<CategoryItem>, DomainError> {
        let state = self.state.read().await;
        let rows = state
            .items
            .iter()
            .filter(|item| &item.category_id == category_id)
            .collect();
        Ok(sorted(rows, |item: &CategoryItem| (item.position, item.created_at)))
    }

    async fn find_by_id(&self, category_id: &Uuid, item_id: &Uuid) -> Result<Option<CategoryItem>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .find(|item| &item.id == item_id && &item.category_id == category_id)
            .cloned())
    }

    async fn find_app_item(&self, category_id: &Uuid, app_id: &Uuid) -> Result<Option<CategoryItem>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .find(|item| &item.category_id == category_id && item.references_app(app_id))
            .cloned())
    }

    async fn max_position(&self, category_id: &Uuid) -> Result<Option<i32>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .filter(|item| &item.category_id == category_id)
            .map(|item| item.position)
            .max())
    }

    async fn create(&self, item: &CategoryItem) -> Result<CategoryItem, DomainError> {
        let mut state = self.state.write().await;
        if !state.categories.iter().any(|c| c.id == item.category_id) {
            return Err(DomainError::CategoryNotFound(item.category_id));
        }
        if let Some(app_id) = item.app_id() {
            if state
                .items
                .iter()
                .any(|existing| existing.category_id == item.category_id && existing.references_app(&app_id))
            {
                return Err(DomainError::ApplicationAlreadyInCategory(app_id));
            }
        }
        state.items.push(item.clone());
        Ok(item.clone())
    }

    async fn delete(&self, item_id: &Uuid) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let before = state.items.len();
        state.items.retain(|item| &item.id != item_id);
        Ok(state.items.len() != before)
    }
}

#[async_trait]
impl ApplicationRegistry for InMemoryCatalog {
    async fn find_application(&self, id: &Uuid, tenant_id: &Uuid) -> Result<Option<Application>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .applications
            .get(id)
            .filter(|app| &app.tenant_id == tenant_id)
            .cloned())
    }
}
