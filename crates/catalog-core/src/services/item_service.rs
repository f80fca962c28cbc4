// ============================================================================
// Catalog Core - Category Item Service
// File: crates/catalog-core/src/services/item_service.rs
// ============================================================================
//! Adding, removing and reading the items of a category

use std::sync::Arc;
use uuid::Uuid;
use tracing::{info, warn};

use catalog_shared::utils::{non_blank, parse_uuid};

use crate::context::RequestContext;
use crate::domain::{
    resolve_position, Category, CategoryItem, ItemContent, ItemIcon, ItemType, RenderedItem,
};
use crate::error::DomainError;
use crate::repositories::{ApplicationRegistry, CategoryItemRepository, CategoryRepository};
use crate::services::ItemRenderer;

/// Untyped add-item payload as submitted by the console.
///
/// `item_type` defaults to `app` so that clients which only send an `app_id`
/// keep working.
#[derive(Debug, Clone, Default)]
pub struct NewItemInput {
    pub item_type: Option<String>,
    pub app_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon_type: Option<String>,
    pub icon: Option<String>,
    pub icon_background: Option<String>,
    pub markdown_content: Option<String>,
    pub url: Option<String>,
    pub position: Option<i32>,
}

pub struct ItemService {
    categories: Arc<dyn CategoryRepository>,
    items: Arc<dyn CategoryItemRepository>,
    registry: Arc<dyn ApplicationRegistry>,
    renderer: ItemRenderer,
}

impl ItemService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        items: Arc<dyn CategoryItemRepository>,
        registry: Arc<dyn ApplicationRegistry>,
    ) -> Self {
        let renderer = ItemRenderer::new(registry.clone());
        Self {
            categories,
            items,
            registry,
            renderer,
        }
    }

    pub fn renderer(&self) -> &ItemRenderer {
        &self.renderer
    }

    pub async fn add_item(
        &self,
        ctx: &RequestContext,
        category_id: &Uuid,
        input: NewItemInput,
    ) -> Result<CategoryItem, DomainError> {
        // 1. Only editors may change categories
        ctx.require_editor()?;

        // 2. Category must belong to the caller's tenant
        let category = self.require_category(ctx, category_id).await?;

        // 3. Validate the discriminator and build the variant payload
        let item_type = parse_item_type(input.item_type.as_deref())?;
        let (name, content) = match item_type {
            ItemType::App => self.resolve_app_content(ctx, &category, &input).await?,
            ItemType::Markdown => {
                let name = non_blank(input.name.clone()).ok_or(DomainError::MissingField("name"))?;
                let markdown_content = non_blank(input.markdown_content.clone())
                    .ok_or(DomainError::MissingField("markdown_content"))?;
                (name, ItemContent::Markdown { markdown_content })
            }
            ItemType::Url => {
                let name = non_blank(input.name.clone()).ok_or(DomainError::MissingField("name"))?;
                let url = non_blank(input.url.clone()).ok_or(DomainError::MissingField("url"))?;
                (name, ItemContent::Url { url })
            }
        };

        // 4. Append after the last item unless a position was requested
        let current_max = self.items.max_position(&category.id).await?;
        let position = resolve_position(input.position, current_max);

        // 5. Build and persist
        let icon = ItemIcon::new(input.icon_type, input.icon, input.icon_background);
        let item = CategoryItem::new(
            category.id,
            name,
            input.description,
            icon,
            content,
            position,
            ctx.user_id,
        )?;
        let created = self.items.create(&item).await?;

        info!(
            "Item {} ({}) added to category {} at position {}",
            created.id,
            created.item_type().as_str(),
            category.id,
            created.position
        );
        Ok(created)
    }

    /// Removes an item by its own id or, for app items, by the referenced app id.
    pub async fn remove_item(
        &self,
        ctx: &RequestContext,
        category_id: &Uuid,
        identifier: &Uuid,
    ) -> Result<(), DomainError> {
        ctx.require_editor()?;

        let category = self.require_category(ctx, category_id).await?;

        let item = match self.items.find_by_id(&category.id, identifier).await? {
            Some(item) => item,
            None => self
                .items
                .find_app_item(&category.id, identifier)
                .await?
                .ok_or_else(|| DomainError::ItemNotFound(identifier.to_string()))?,
        };

        if !self.items.delete(&item.id).await? {
            return Err(DomainError::ItemNotFound(identifier.to_string()));
        }

        info!("Item {} removed from category {}", item.id, category.id);
        Ok(())
    }

    pub async fn get_item(
        &self,
        ctx: &RequestContext,
        category_id: &Uuid,
        item_id: &Uuid,
    ) -> Result<RenderedItem, DomainError> {
        let category = self.require_category(ctx, category_id).await?;

        let item = self
            .items
            .find_by_id(&category.id, item_id)
            .await?
            .ok_or_else(|| DomainError::ItemNotFound(item_id.to_string()))?;

        Ok(self.renderer.render_item(ctx, &item).await)
    }

    pub async fn render_item(&self, ctx: &RequestContext, item: &CategoryItem) -> RenderedItem {
        self.renderer.render_item(ctx, item).await
    }

    async fn resolve_app_content(
        &self,
        ctx: &RequestContext,
        category: &Category,
        input: &NewItemInput,
    ) -> Result<(String, ItemContent), DomainError> {
        let raw_app_id = non_blank(input.app_id.clone()).ok_or(DomainError::MissingField("app_id"))?;
        let app_id = parse_uuid(&raw_app_id)
            .ok_or_else(|| DomainError::ValidationError(format!("Invalid app_id: {}", raw_app_id)))?;

        let app = self
            .registry
            .find_application(&app_id, &ctx.tenant_id)
            .await?
            .filter(|app| app.is_normal())
            .ok_or_else(|| {
                warn!("Add item failed: app {} not available in tenant {}", app_id, ctx.tenant_id);
                DomainError::ApplicationNotFound(app_id)
            })?;

        if self.items.find_app_item(&category.id, &app_id).await?.is_some() {
            warn!("Add item failed: app {} already in category {}", app_id, category.id);
            return Err(DomainError::ApplicationAlreadyInCategory(app_id));
        }

        let name = non_blank(input.name.clone())
            .or_else(|| non_blank(Some(app.name)))
            .unwrap_or_else(|| format!("App {}", app_id));
        Ok((name, ItemContent::App { app_id }))
    }

    async fn require_category(&self, ctx: &RequestContext, id: &Uuid) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(&ctx.tenant_id, id)
            .await?
            .ok_or(DomainError::CategoryNotFound(*id))
    }
}

fn parse_item_type(raw: Option<&str>) -> Result<ItemType, DomainError> {
    match raw {
        None => Ok(ItemType::App),
        Some(value) => ItemType::from_str(value.trim())
            .ok_or_else(|| DomainError::UnsupportedItemType(value.to_string())),
    }
}
