//! Item rendering with graceful degradation
//!
//! Writes are strict but reads are lenient: a listing must stay available even
//! when an item points at an application that was deleted or cannot be looked
//! up right now.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::context::RequestContext;
use crate::domain::{CategoryItem, ItemContent, RenderedItem};
use crate::repositories::ApplicationRegistry;

#[derive(Clone)]
pub struct ItemRenderer {
    registry: Arc<dyn ApplicationRegistry>,
}

impl ItemRenderer {
    pub fn new(registry: Arc<dyn ApplicationRegistry>) -> Self {
        Self { registry }
    }

    /// Projects an item into its display record. Never fails.
    pub async fn render_item(&self, ctx: &RequestContext, item: &CategoryItem) -> RenderedItem {
        let app_id = match &item.content {
            ItemContent::App { app_id } => *app_id,
            ItemContent::Markdown { .. } | ItemContent::Url { .. } => {
                return RenderedItem::from_static(item);
            }
        };

        match self.registry.find_application(&app_id, &ctx.tenant_id).await {
            Ok(Some(app)) => RenderedItem::from_application(item, &app),
            Ok(None) => {
                debug!("App {} of item {} no longer exists", app_id, item.id);
                RenderedItem::missing_app(item, app_id)
            }
            Err(e) => {
                warn!("Failed to resolve app {} for item {}: {}", app_id, item.id, e);
                RenderedItem::fallback(item)
            }
        }
    }

    pub async fn render_items(&self, ctx: &RequestContext, items: &[CategoryItem]) -> Vec<RenderedItem> {
        let mut rendered = Vec::with_capacity(items.len());
        for item in items {
            rendered.push(self.render_item(ctx, item).await);
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TenantRole;
    use crate::domain::{Application, ItemIcon};
    use crate::error::DomainError;
    use crate::repositories::MockApplicationRegistry;
    use uuid::Uuid;

    fn ctx() -> RequestContext {
        RequestContext::new(Uuid::new_v4(), Uuid::new_v4(), TenantRole::Normal)
    }

    fn app_item(app_id: Uuid) -> CategoryItem {
        CategoryItem::new(
            Uuid::new_v4(),
            "Support Bot".to_string(),
            None,
            ItemIcon::default(),
            ItemContent::App { app_id },
            1,
            Uuid::new_v4(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_renders_live_application() {
        let ctx = ctx();
        let app_id = Uuid::new_v4();
        let tenant_id = ctx.tenant_id;

        let mut registry = MockApplicationRegistry::new();
        registry
            .expect_find_application()
            .withf(move |id, tenant| *id == app_id && *tenant == tenant_id)
            .times(1)
            .returning(|id, tenant| {
                Ok(Some(Application {
                    id: *id,
                    tenant_id: *tenant,
                    name: "Support Bot v2".to_string(),
                    description: Some("Answers tickets".to_string()),
                    mode: "chat".to_string(),
                    icon_type: Some("emoji".to_string()),
                    icon: Some("🎧".to_string()),
                    icon_background: Some("#FFEAD5".to_string()),
                    icon_url: None,
                    site_code: Some("abc123".to_string()),
                    status: "normal".to_string(),
                }))
            });

        let renderer = ItemRenderer::new(Arc::new(registry));
        let rendered = renderer.render_item(&ctx, &app_item(app_id)).await;

        assert_eq!(rendered.name, "Support Bot v2");
        assert_eq!(rendered.mode.as_deref(), Some("chat"));
        assert_eq!(rendered.site_code.as_deref(), Some("abc123"));
        assert_eq!(rendered.app_id, Some(app_id));
    }

    #[tokio::test]
    async fn test_dangling_reference_renders_placeholder() {
        let app_id = Uuid::new_v4();
        let mut registry = MockApplicationRegistry::new();
        registry.expect_find_application().returning(|_, _| Ok(None));

        let renderer = ItemRenderer::new(Arc::new(registry));
        let rendered = renderer.render_item(&ctx(), &app_item(app_id)).await;

        assert_eq!(rendered.name, format!("App {}", app_id));
        assert!(rendered.icon.is_some());
    }

    #[tokio::test]
    async fn test_lookup_failure_degrades_to_fallback() {
        let mut registry = MockApplicationRegistry::new();
        registry
            .expect_find_application()
            .returning(|_, _| Err(DomainError::DatabaseError("connection reset".to_string())));

        let item = app_item(Uuid::new_v4());
        let renderer = ItemRenderer::new(Arc::new(registry));
        let rendered = renderer.render_item(&ctx(), &item).await;

        assert_eq!(rendered.id, item.id);
        assert_eq!(rendered.name, "Support Bot");
        assert!(rendered.icon.is_some());
    }

    #[tokio::test]
    async fn test_static_items_skip_registry() {
        let mut registry = MockApplicationRegistry::new();
        registry.expect_find_application().never();

        let item = CategoryItem::new(
            Uuid::new_v4(),
            "Docs".to_string(),
            None,
            ItemIcon::default(),
            ItemContent::Url { url: "https://example.com".to_string() },
            1,
            Uuid::new_v4(),
        )
        .unwrap();

        let renderer = ItemRenderer::new(Arc::new(registry));
        let rendered = renderer.render_item(&ctx(), &item).await;

        assert_eq!(rendered.url.as_deref(), Some("https://example.com"));
    }
}
