//! Integration tests for the JSON API.
//!
//! Each test builds the full router over an in-memory libSQL store and
//! drives it with `tower::ServiceExt::oneshot`, the way a UI layer would.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use listing_shell::app::AppServices;
use listing_shell::catalog::StaticCatalog;
use listing_shell::error::DatabaseError;
use listing_shell::session::PlaceholderAuthProvider;
use listing_shell::store::{KeyValueStore, LibSqlStore};
use listing_shell::wizard::NoopPublisher;

/// Libsql store that refuses every write to the favorites key.
struct FavoritesReadOnly(LibSqlStore);

#[async_trait::async_trait]
impl KeyValueStore for FavoritesReadOnly {
    async fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        self.0.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        if key == "session.favorites" {
            return Err(DatabaseError::Query("disk full".to_string()));
        }
        self.0.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<bool, DatabaseError> {
        if key == "session.favorites" {
            return Err(DatabaseError::Query("disk full".to_string()));
        }
        self.0.remove(key).await
    }
}

async fn services_over(kv: Arc<dyn KeyValueStore>) -> AppServices {
    AppServices::start(
        kv,
        Arc::new(PlaceholderAuthProvider),
        Arc::new(NoopPublisher),
        Arc::new(StaticCatalog::demo()),
    )
    .await
}

async fn app() -> Router {
    let kv = Arc::new(LibSqlStore::new_memory().await.expect("memory store"));
    services_over(kv).await.router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1_000_000)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn fresh_session_is_ready_and_signed_out() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/session", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["authenticated"], false);
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn sign_in_then_out() {
    let app = app().await;

    let (status, profile) = send(
        &app,
        Method::POST,
        "/api/session/sign-in",
        Some(json!({ "provider": "google" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["name"], "Demo User");

    let (_, session) = send(&app, Method::GET, "/api/session", None).await;
    assert_eq!(session["authenticated"], true);
    assert_eq!(session["user"]["id"], profile["id"]);

    let (status, _) = send(&app, Method::POST, "/api/session/sign-out", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, session) = send(&app, Method::GET, "/api/session", None).await;
    assert_eq!(session["authenticated"], false);
}

#[tokio::test]
async fn unknown_provider_is_bad_request() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/session/sign-in",
        Some(json!({ "provider": "fax" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("fax"));
}

#[tokio::test]
async fn favorites_project_catalog_items_in_order() {
    let app = app().await;
    for id in ["p3", "j1", "p3", "ghost"] {
        let (status, _) = send(&app, Method::PUT, &format!("/api/favorites/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, items) = send(&app, Method::GET, "/api/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p3", "j1"]);

    let (status, body) = send(&app, Method::DELETE, "/api/favorites/p3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], true);

    let (_, body) = send(&app, Method::DELETE, "/api/favorites/nonexistent", None).await;
    assert_eq!(body["changed"], false);
}

#[tokio::test]
async fn catalog_filters_by_kind() {
    let app = app().await;
    let (status, items) = send(&app, Method::GET, "/api/catalog?kind=job", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = items.as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|item| item["kind"] == "job"));
}

#[tokio::test]
async fn deck_swipe_right_adds_favorite() {
    let app = app().await;

    let (_, deck) = send(&app, Method::GET, "/api/deck", None).await;
    let top = deck["current"]["id"].as_str().unwrap().to_string();

    let (status, outcome) = send(
        &app,
        Method::POST,
        "/api/deck/swipe",
        Some(json!({ "direction": "right" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["item_id"], top.as_str());
    assert_eq!(outcome["favorited"], true);

    let (_, session) = send(&app, Method::GET, "/api/session", None).await;
    assert_eq!(session["favorite_ids"], json!([top]));
}

#[tokio::test]
async fn wizard_walk_merge_and_submit() {
    let app = app().await;

    let (_, view) = send(
        &app,
        Method::PATCH,
        "/api/wizard/draft",
        Some(json!({ "category": "property", "price": "500000" })),
    )
    .await;
    assert_eq!(view["draft"]["price"], "500000");
    assert_eq!(view["steps"].as_array().unwrap().len(), 8);

    let (_, view) = send(
        &app,
        Method::PATCH,
        "/api/wizard/draft",
        Some(json!({ "beds": 3 })),
    )
    .await;
    assert_eq!(view["draft"]["price"], "500000");
    assert_eq!(view["draft"]["beds"], 3);

    for _ in 0..20 {
        send(&app, Method::POST, "/api/wizard/next", None).await;
    }
    let (_, view) = send(&app, Method::GET, "/api/wizard", None).await;
    assert_eq!(view["draft"]["step"], 8);
    assert_eq!(view["current"]["title"], "Price and description");

    let (status, receipt) = send(&app, Method::POST, "/api/wizard/submit", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["category"], "property");

    let (_, view) = send(&app, Method::GET, "/api/wizard", None).await;
    assert_eq!(view["draft"]["step"], 1);
    assert_eq!(view["draft"]["price"], "");
    assert_eq!(view["draft"]["category"], "unset");
}

#[tokio::test]
async fn wizard_previous_stops_at_first_step() {
    let app = app().await;
    for _ in 0..5 {
        send(&app, Method::POST, "/api/wizard/previous", None).await;
    }
    let (_, view) = send(&app, Method::GET, "/api/wizard", None).await;
    assert_eq!(view["draft"]["step"], 1);
}

#[tokio::test]
async fn session_survives_restart_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shell.db");

    {
        let kv = Arc::new(LibSqlStore::new_local(&path).await.expect("open"));
        let services = services_over(kv).await;
        services.session.sign_in("apple").await.expect("sign in");
        for id in ["a", "b", "c"] {
            services.session.add_favorite(id).await.expect("favorite");
        }
    }

    let kv = Arc::new(LibSqlStore::new_local(&path).await.expect("reopen"));
    let services = services_over(kv).await;
    let snapshot = services.session.snapshot().await;
    assert!(snapshot.ready);
    assert!(snapshot.authenticated);
    assert_eq!(snapshot.favorite_ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn unpersisted_favorite_is_503_but_other_calls_succeed() {
    let kv = Arc::new(FavoritesReadOnly(
        LibSqlStore::new_memory().await.expect("memory store"),
    ));
    let app = services_over(kv).await.router();

    let (status, _) = send(&app, Method::PUT, "/api/favorites/p1", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/session/sign-in",
        Some(json!({ "provider": "google" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, "/api/favorites/absent", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], false);

    let (_, session) = send(&app, Method::GET, "/api/session", None).await;
    assert_eq!(session["authenticated"], true);
    assert_eq!(session["favorite_ids"], json!(["p1"]));
    assert_eq!(session["pending_writes"], json!(["session.favorites"]));
}
