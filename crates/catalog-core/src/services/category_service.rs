// ============================================================================
// Catalog Core - Category Service
// File: crates/catalog-core/src/services/category_service.rs
// ============================================================================
//! Tenant-scoped category management

use std::sync::Arc;
use uuid::Uuid;
use tracing::{info, warn};

use crate::context::RequestContext;
use crate::domain::{resolve_position, Category, CategoryView};
use crate::error::DomainError;
use crate::repositories::{CategoryItemRepository, CategoryRepository};
use crate::services::ItemRenderer;

/// Fields accepted when creating or updating a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub position: Option<i32>,
}

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    items: Arc<dyn CategoryItemRepository>,
    renderer: ItemRenderer,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        items: Arc<dyn CategoryItemRepository>,
        renderer: ItemRenderer,
    ) -> Self {
        Self {
            categories,
            items,
            renderer,
        }
    }

    /// Categories of the caller's tenant, ordered by position then creation time.
    pub async fn list_categories(&self, ctx: &RequestContext) -> Result<Vec<Category>, DomainError> {
        self.categories.list_by_tenant(&ctx.tenant_id).await
    }

    /// Same ordering as [`Self::list_categories`], each with its rendered items.
    pub async fn list_categories_with_items(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<CategoryView>, DomainError> {
        let categories = self.list_categories(ctx).await?;

        let mut views = Vec::with_capacity(categories.len());
        for category in categories {
            views.push(self.build_view(ctx, category).await?);
        }
        Ok(views)
    }

    pub async fn get_category(&self, ctx: &RequestContext, id: &Uuid) -> Result<CategoryView, DomainError> {
        let category = self.require_category(ctx, id).await?;
        self.build_view(ctx, category).await
    }

    pub async fn create_category(
        &self,
        ctx: &RequestContext,
        input: CategoryInput,
    ) -> Result<Category, DomainError> {
        // 1. Only editors may change categories
        ctx.require_editor()?;

        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::MissingField("name"));
        }

        // 2. Name must be unique within the tenant
        if self.categories.find_by_name(&ctx.tenant_id, &name).await?.is_some() {
            warn!("Create category failed: name already exists in tenant {}: {}", ctx.tenant_id, name);
            return Err(DomainError::CategoryNameAlreadyExists(name));
        }

        // 3. Append after the last category unless a position was requested
        let current_max = self.categories.max_position(&ctx.tenant_id).await?;
        let position = resolve_position(input.position, current_max);

        // 4. Build and persist
        let category = Category::new(ctx.tenant_id, name, input.description, position, ctx.user_id)?;
        let created = self.categories.create(&category).await?;

        info!(
            "Category created: {} (tenant: {}, position: {})",
            created.id, created.tenant_id, created.position
        );
        Ok(created)
    }

    pub async fn update_category(
        &self,
        ctx: &RequestContext,
        id: &Uuid,
        input: CategoryInput,
    ) -> Result<Category, DomainError> {
        ctx.require_editor()?;

        let mut category = self.require_category(ctx, id).await?;

        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::MissingField("name"));
        }

        // The new name may only collide with the category itself
        if let Some(existing) = self.categories.find_by_name(&ctx.tenant_id, &name).await? {
            if existing.id != category.id {
                warn!("Update category {} failed: name already exists: {}", id, name);
                return Err(DomainError::CategoryNameAlreadyExists(name));
            }
        }

        category.apply_update(name, input.description, input.position, ctx.user_id)?;
        let updated = self.categories.update(&category).await?;

        info!("Category updated: {} (tenant: {})", updated.id, updated.tenant_id);
        Ok(updated)
    }

    /// Deletes the category together with all of its items.
    pub async fn delete_category(&self, ctx: &RequestContext, id: &Uuid) -> Result<(), DomainError> {
        ctx.require_editor()?;

        let category = self.require_category(ctx, id).await?;

        if !self.categories.delete_with_items(&ctx.tenant_id, &category.id).await? {
            return Err(DomainError::CategoryNotFound(*id));
        }

        info!("Category deleted: {} (tenant: {})", id, ctx.tenant_id);
        Ok(())
    }

    async fn require_category(&self, ctx: &RequestContext, id: &Uuid) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(&ctx.tenant_id, id)
            .await?
            .ok_or(DomainError::CategoryNotFound(*id))
    }

    async fn build_view(&self, ctx: &RequestContext, category: Category) -> Result<CategoryView, DomainError> {
        let items = self.items.list_by_category(&category.id).await?;
        let rendered = self.renderer.render_items(ctx, &items).await;
        Ok(CategoryView::new(category, rendered))
    }
}
