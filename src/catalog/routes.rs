//! REST endpoints for browsing the catalog and swiping the discovery deck.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;

use crate::session::SessionStore;

use super::deck::{DiscoveryDeck, SwipeDirection};
use super::model::{Catalog, CatalogItem, ItemKind};

/// Shared state for catalog routes.
#[derive(Clone)]
pub struct CatalogRouteState {
    pub catalog: Arc<dyn Catalog>,
    pub session: Arc<SessionStore>,
    pub deck: Arc<Mutex<DiscoveryDeck>>,
}

#[derive(Debug, Deserialize)]
struct CatalogQuery {
    kind: Option<ItemKind>,
}

#[derive(Debug, Deserialize)]
struct SwipeRequest {
    direction: SwipeDirection,
}

/// GET /api/catalog?kind=property|job
async fn list_catalog(
    State(state): State<CatalogRouteState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let items: Vec<CatalogItem> = state
        .catalog
        .items()
        .iter()
        .filter(|item| query.kind.is_none_or(|k| item.kind == k))
        .cloned()
        .collect();
    Json(items)
}

/// GET /api/deck
async fn get_deck(State(state): State<CatalogRouteState>) -> impl IntoResponse {
    let deck = state.deck.lock().await;
    Json(json!({
        "current": deck.current(),
        "remaining": deck.remaining(),
    }))
}

/// POST /api/deck/swipe
///
/// A 503 on a right swipe means the favorite is held in memory but not yet
/// persisted; it is retried on the next mutation. The card stays on top.
async fn swipe(
    State(state): State<CatalogRouteState>,
    Json(body): Json<SwipeRequest>,
) -> Response {
    let mut deck = state.deck.lock().await;
    match deck.swipe(body.direction, &state.session).await {
        Ok(Some(outcome)) => Json(outcome).into_response(),
        Ok(None) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "Deck is empty" })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// POST /api/deck/restart
async fn restart_deck(State(state): State<CatalogRouteState>) -> impl IntoResponse {
    state.deck.lock().await.restart();
    StatusCode::NO_CONTENT
}

/// Build the catalog and deck REST routes.
pub fn catalog_routes(state: CatalogRouteState) -> Router {
    Router::new()
        .route("/api/catalog", get(list_catalog))
        .route("/api/deck", get(get_deck))
        .route("/api/deck/swipe", post(swipe))
        .route("/api/deck/restart", post(restart_deck))
        .with_state(state)
}
