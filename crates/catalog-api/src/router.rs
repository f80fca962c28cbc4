use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{categories, health, items};
use crate::state::AppState;

/// Builds the console router.
///
/// An empty `allowed_origins` list yields a permissive CORS layer.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    // Public routes (no token)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let console_routes = Router::new()
        .route(
            "/console/api/agent-categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/console/api/agent-categories/{category_id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/console/api/agent-categories/{category_id}/apps",
            post(items::add_item),
        )
        .route(
            "/console/api/agent-categories/{category_id}/apps/{item_id}",
            get(items::get_item).delete(items::remove_item),
        );

    Router::new()
        .merge(public_routes)
        .merge(console_routes)
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
