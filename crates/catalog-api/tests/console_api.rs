//! Console API driven through the router with an in-memory store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use catalog_api::{build_router, AppState};
use catalog_core::domain::Application;
use catalog_core::services::{CategoryService, ItemRenderer, ItemService};
use catalog_infrastructure::InMemoryCatalog;
use catalog_security::JwtService;

const SECRET: &str = "console-api-test-secret";

struct TestApp {
    router: Router,
    store: InMemoryCatalog,
    jwt: JwtService,
}

impl TestApp {
    fn new() -> Self {
        let store = InMemoryCatalog::new();
        let shared = Arc::new(store.clone());
        let jwt = JwtService::new(SECRET.to_string(), 900);

        let state = AppState {
            category_service: Arc::new(CategoryService::new(
                shared.clone(),
                shared.clone(),
                ItemRenderer::new(shared.clone()),
            )),
            item_service: Arc::new(ItemService::new(shared.clone(), shared.clone(), shared.clone())),
            categories: shared,
            jwt: jwt.clone(),
        };

        Self {
            router: build_router(state, &[]),
            store,
            jwt,
        }
    }

    fn token(&self, tenant_id: Uuid, role: &str) -> String {
        self.jwt
            .generate_access_token(&Uuid::new_v4(), &tenant_id, role)
            .unwrap()
    }

    async fn send(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}

fn application(tenant_id: Uuid) -> Application {
    Application {
        id: Uuid::new_v4(),
        tenant_id,
        name: "Support Bot".to_string(),
        description: None,
        mode: "agent-chat".to_string(),
        icon_type: Some("emoji".to_string()),
        icon: Some("🎧".to_string()),
        icon_background: None,
        icon_url: None,
        site_code: None,
        status: "normal".to_string(),
    }
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = app.send(Method::GET, "/health/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_console_requires_bearer_token() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/console/api/agent-categories", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = app
        .send(Method::GET, "/console/api/agent-categories", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sales_category_flow() {
    let app = TestApp::new();
    let token = app.token(Uuid::new_v4(), "editor");

    let (status, body) = app
        .send(
            Method::POST,
            "/console/api/agent-categories",
            Some(&token),
            Some(json!({ "name": "Sales" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["position"], 1);
    let category_id = body["data"]["id"].as_str().unwrap().to_string();
    let items_uri = format!("/console/api/agent-categories/{}/apps", category_id);

    let (status, body) = app
        .send(
            Method::POST,
            &items_uri,
            Some(&token),
            Some(json!({ "item_type": "url", "name": "Docs", "url": "https://x" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["position"], 1);
    assert_eq!(body["data"]["icon"], "🔗");

    let (status, body) = app
        .send(
            Method::POST,
            &items_uri,
            Some(&token),
            Some(json!({ "item_type": "url", "name": "Handbook", "url": "https://x/handbook" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["position"], 2);

    let (status, body) = app
        .send(Method::GET, "/console/api/agent-categories", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["categories"][0]["name"], "Sales");
    assert_eq!(body["data"]["categories"][0]["apps"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["categories"][0]["apps"][1]["name"], "Handbook");
}

#[tokio::test]
async fn test_duplicate_category_name_is_conflict() {
    let app = TestApp::new();
    let token = app.token(Uuid::new_v4(), "admin");
    let body = json!({ "name": "Sales" });

    app.send(Method::POST, "/console/api/agent-categories", Some(&token), Some(body.clone()))
        .await;
    let (status, response) = app
        .send(Method::POST, "/console/api/agent-categories", Some(&token), Some(body))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_missing_name_is_validation_error() {
    let app = TestApp::new();
    let token = app.token(Uuid::new_v4(), "owner");

    let (status, body) = app
        .send(
            Method::POST,
            "/console/api/agent-categories",
            Some(&token),
            Some(json!({ "description": "no name" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_normal_member_is_forbidden() {
    let app = TestApp::new();
    let token = app.token(Uuid::new_v4(), "normal");

    let (status, body) = app
        .send(
            Method::POST,
            "/console/api/agent-categories",
            Some(&token),
            Some(json!({ "name": "Sales" })),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let app = TestApp::new();
    let token = app.token(Uuid::new_v4(), "editor");

    let uri = format!("/console/api/agent-categories/{}", Uuid::new_v4());
    let (status, body) = app.send(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = app
        .send(Method::GET, "/console/api/agent-categories/not-a-uuid", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_app_item_lifecycle() {
    let app = TestApp::new();
    let tenant_id = Uuid::new_v4();
    let token = app.token(tenant_id, "editor");
    let bot = application(tenant_id);
    app.store.insert_application(bot.clone()).await;

    let (_, body) = app
        .send(
            Method::POST,
            "/console/api/agent-categories",
            Some(&token),
            Some(json!({ "name": "Support" })),
        )
        .await;
    let category_id = body["data"]["id"].as_str().unwrap().to_string();
    let items_uri = format!("/console/api/agent-categories/{}/apps", category_id);

    // item_type defaults to app
    let (status, body) = app
        .send(Method::POST, &items_uri, Some(&token), Some(json!({ "app_id": bot.id })))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["item_type"], "app");
    assert_eq!(body["data"]["mode"], "agent-chat");
    let item_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(Method::POST, &items_uri, Some(&token), Some(json!({ "app_id": bot.id })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, body) = app
        .send(Method::GET, &format!("{}/{}", items_uri, item_id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Support Bot");

    // Remove by the app id instead of the item id
    let (status, _) = app
        .send(Method::DELETE, &format!("{}/{}", items_uri, bot.id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .send(Method::GET, &format!("{}/{}", items_uri, item_id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_category_cascades_items() {
    let app = TestApp::new();
    let token = app.token(Uuid::new_v4(), "editor");

    let (_, body) = app
        .send(
            Method::POST,
            "/console/api/agent-categories",
            Some(&token),
            Some(json!({ "name": "Guides" })),
        )
        .await;
    let category_id = body["data"]["id"].as_str().unwrap().to_string();
    let category_uuid = Uuid::parse_str(&category_id).unwrap();

    app.send(
        Method::POST,
        &format!("/console/api/agent-categories/{}/apps", category_id),
        Some(&token),
        Some(json!({ "item_type": "markdown", "name": "Intro", "markdown_content": "# Hello" })),
    )
    .await;
    assert_eq!(app.store.item_count(&category_uuid).await, 1);

    let uri = format!("/console/api/agent-categories/{}", category_id);
    let (status, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.store.item_count(&category_uuid).await, 0);

    let (status, _) = app.send(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_categories_are_tenant_isolated() {
    let app = TestApp::new();
    let tenant_a = app.token(Uuid::new_v4(), "editor");
    let tenant_b = app.token(Uuid::new_v4(), "editor");

    app.send(
        Method::POST,
        "/console/api/agent-categories",
        Some(&tenant_a),
        Some(json!({ "name": "Sales" })),
    )
    .await;

    let (status, body) = app
        .send(
            Method::POST,
            "/console/api/agent-categories",
            Some(&tenant_b),
            Some(json!({ "name": "Sales" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["position"], 1);

    let (_, body) = app
        .send(Method::GET, "/console/api/agent-categories", Some(&tenant_b), None)
        .await;
    assert_eq!(body["data"]["categories"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_item_payload_limits_are_validation_errors() {
    let app = TestApp::new();
    let token = app.token(Uuid::new_v4(), "editor");

    let (_, body) = app
        .send(
            Method::POST,
            "/console/api/agent-categories",
            Some(&token),
            Some(json!({ "name": "Links" })),
        )
        .await;
    let category_id = body["data"]["id"].as_str().unwrap().to_string();
    let items_uri = format!("/console/api/agent-categories/{}/apps", category_id);

    let (status, body) = app
        .send(
            Method::POST,
            &items_uri,
            Some(&token),
            Some(json!({ "item_type": "url", "name": "Docs", "url": "https://x", "icon": "x".repeat(300) })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = app
        .send(
            Method::POST,
            &items_uri,
            Some(&token),
            Some(json!({ "item_type": "", "name": "Docs", "url": "https://x" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    assert_eq!(app.store.item_count(&Uuid::parse_str(&category_id).unwrap()).await, 0);
}
