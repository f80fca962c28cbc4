use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

use catalog_api::{build_router, AppState};
use catalog_core::repositories::{ApplicationRegistry, CategoryItemRepository, CategoryRepository};
use catalog_core::services::{CategoryService, ItemRenderer, ItemService};
use catalog_infrastructure::{
    create_pool, run_migrations, InMemoryCatalog, PgApplicationRegistry, PgCategoryItemRepository,
    PgCategoryRepository,
};
use catalog_security::JwtService;
use catalog_shared::config::{AppConfig, DatabaseBackend, DatabaseSettings};

struct Ports {
    categories: Arc<dyn CategoryRepository>,
    items: Arc<dyn CategoryItemRepository>,
    registry: Arc<dyn ApplicationRegistry>,
}

async fn connect_storage(settings: &DatabaseSettings) -> anyhow::Result<Ports> {
    match settings.backend {
        DatabaseBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(settings).await?;
            info!("Database connection established.");

            if settings.run_migrations {
                run_migrations(&pool).await?;
            }

            Ok(Ports {
                categories: Arc::new(PgCategoryRepository::new(pool.clone())),
                items: Arc::new(PgCategoryItemRepository::new(pool.clone())),
                registry: Arc::new(PgApplicationRegistry::new(pool)),
            })
        }
        DatabaseBackend::Memory => {
            warn!("Using in-memory storage; data is lost on shutdown");
            let store = Arc::new(InMemoryCatalog::new());
            Ok(Ports {
                categories: store.clone(),
                items: store.clone(),
                registry: store,
            })
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry; the guard flushes the file writer on drop
    let _log_guard = catalog_shared::telemetry::init_telemetry(&config.telemetry)?;

    info!("{} starting (env: {})", config.app.name, config.app.env);

    if config.is_production() && config.database.backend == DatabaseBackend::Memory {
        anyhow::bail!("the memory storage backend cannot be used in production");
    }

    let ports = connect_storage(&config.database).await?;

    let renderer = ItemRenderer::new(ports.registry.clone());
    let category_service = CategoryService::new(ports.categories.clone(), ports.items.clone(), renderer);
    let item_service = ItemService::new(ports.categories.clone(), ports.items, ports.registry);

    let state = AppState {
        category_service: Arc::new(category_service),
        item_service: Arc::new(item_service),
        categories: ports.categories,
        jwt: JwtService::new(config.jwt.secret.clone(), config.jwt.access_token_expiry),
    };

    let app = build_router(state, &config.cors.allowed_origins);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
