//! REST endpoints for the session and favorites.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::catalog::Catalog;
use crate::error::SessionError;

use super::store::SessionStore;

/// Shared state for session routes.
#[derive(Clone)]
pub struct SessionRouteState {
    pub session: Arc<SessionStore>,
    pub catalog: Arc<dyn Catalog>,
}

#[derive(Debug, Deserialize)]
struct SignInRequest {
    provider: String,
}

/// GET /api/session
async fn get_session(State(state): State<SessionRouteState>) -> impl IntoResponse {
    Json(state.session.snapshot().await)
}

/// POST /api/session/sign-in
///
/// A 503 means the change is applied in memory but this call's own keys
/// did not persist. They stay pending and are retried on the next mutation.
async fn sign_in(
    State(state): State<SessionRouteState>,
    Json(body): Json<SignInRequest>,
) -> Response {
    match state.session.sign_in(&body.provider).await {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => session_error(e),
    }
}

/// POST /api/session/sign-out
///
/// A 503 means the change is applied in memory but this call's own keys
/// did not persist. They stay pending and are retried on the next mutation.
async fn sign_out(State(state): State<SessionRouteState>) -> Response {
    match state.session.sign_out().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => session_error(e),
    }
}

/// GET /api/favorites
///
/// Favorited catalog items, in the order they were favorited.
async fn list_favorites(State(state): State<SessionRouteState>) -> impl IntoResponse {
    Json(state.session.list_favorites(state.catalog.as_ref()).await)
}

/// PUT /api/favorites/{id}
///
/// A 503 means the change is applied in memory but this call's own keys
/// did not persist. They stay pending and are retried on the next mutation.
async fn add_favorite(
    State(state): State<SessionRouteState>,
    Path(id): Path<String>,
) -> Response {
    match state.session.add_favorite(&id).await {
        Ok(added) => Json(json!({ "id": id, "favorite": true, "changed": added })).into_response(),
        Err(e) => session_error(e),
    }
}

/// DELETE /api/favorites/{id}
///
/// A 503 means the change is applied in memory but this call's own keys
/// did not persist. They stay pending and are retried on the next mutation.
async fn remove_favorite(
    State(state): State<SessionRouteState>,
    Path(id): Path<String>,
) -> Response {
    match state.session.remove_favorite(&id).await {
        Ok(removed) => {
            Json(json!({ "id": id, "favorite": false, "changed": removed })).into_response()
        }
        Err(e) => session_error(e),
    }
}

fn session_error(err: SessionError) -> Response {
    let status = match err {
        SessionError::Auth(_) => StatusCode::BAD_REQUEST,
        SessionError::Persistence { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

/// Build the session REST routes.
pub fn session_routes(state: SessionRouteState) -> Router {
    Router::new()
        .route("/api/session", get(get_session))
        .route("/api/session/sign-in", post(sign_in))
        .route("/api/session/sign-out", post(sign_out))
        .route("/api/favorites", get(list_favorites))
        .route("/api/favorites/{id}", put(add_favorite).delete(remove_favorite))
        .with_state(state)
}
