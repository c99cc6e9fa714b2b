#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use catalog_storefront::{
    contact::ContactConfig,
    middleware::auth::Claims,
    routes::create_app,
    state::AppState,
    store::LocalCatalogStore,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<LocalCatalogStore>,
    _dir: TempDir,
}

pub async fn seeded_app() -> TestApp {
    let dir = TempDir::new().expect("temp dir");
    let store = Arc::new(LocalCatalogStore::new(dir.path().join("fashionProducts.json")));
    store.seed_defaults().await.expect("seed");
    let state = AppState::new(store.clone(), ContactConfig::new("15550001111"), SECRET);
    TestApp {
        router: create_app(state, 1024 * 1024),
        store,
        _dir: dir,
    }
}

pub fn token(role: &str) -> String {
    let claims = Claims {
        sub: "tester".into(),
        role: role.into(),
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token")
}

pub fn admin_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token("admin")));
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub fn ids(items: &Value) -> Vec<String> {
    items
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["id"].as_str().expect("id").to_string())
        .collect()
}
