//! REST endpoints for the listing-creation wizard.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;

use super::engine::WizardEngine;
use super::model::{ListingDraft, ListingDraftPatch};
use super::state::{self, StepInfo};

/// Shared state for wizard routes.
#[derive(Clone)]
pub struct WizardRouteState {
    pub engine: Arc<WizardEngine>,
}

/// Draft plus step metadata, as rendered by the UI.
#[derive(Debug, Serialize)]
struct WizardView {
    draft: ListingDraft,
    current: StepInfo,
    steps: Vec<StepInfo>,
}

async fn view(engine: &WizardEngine) -> WizardView {
    let draft = engine.draft().await;
    WizardView {
        current: state::step_info(draft.step, draft.category),
        steps: state::steps_for(draft.category),
        draft,
    }
}

/// GET /api/wizard
async fn get_wizard(State(state): State<WizardRouteState>) -> impl IntoResponse {
    Json(view(&state.engine).await)
}

/// PATCH /api/wizard/draft
async fn update_draft(
    State(state): State<WizardRouteState>,
    Json(changes): Json<ListingDraftPatch>,
) -> impl IntoResponse {
    state.engine.update_fields(changes).await;
    Json(view(&state.engine).await)
}

/// POST /api/wizard/next
async fn next_step(State(state): State<WizardRouteState>) -> impl IntoResponse {
    state.engine.go_next().await;
    Json(view(&state.engine).await)
}

/// POST /api/wizard/previous
async fn previous_step(State(state): State<WizardRouteState>) -> impl IntoResponse {
    state.engine.go_previous().await;
    Json(view(&state.engine).await)
}

/// POST /api/wizard/reset
async fn reset(State(state): State<WizardRouteState>) -> impl IntoResponse {
    state.engine.reset().await;
    Json(view(&state.engine).await)
}

/// POST /api/wizard/submit
///
/// 502 when the publisher fails; the draft is kept in that case.
async fn submit(State(state): State<WizardRouteState>) -> Response {
    match state.engine.submit().await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// Build the wizard REST routes.
pub fn wizard_routes(state: WizardRouteState) -> Router {
    Router::new()
        .route("/api/wizard", get(get_wizard))
        .route("/api/wizard/draft", patch(update_draft))
        .route("/api/wizard/next", post(next_step))
        .route("/api/wizard/previous", post(previous_step))
        .route("/api/wizard/reset", post(reset))
        .route("/api/wizard/submit", post(submit))
        .with_state(state)
}
