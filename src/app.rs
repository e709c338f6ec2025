//! Wiring — builds the stores and merges every module's routes.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::{Catalog, CatalogRouteState, DiscoveryDeck, catalog_routes};
use crate::session::{AuthProvider, SessionRouteState, SessionStore, session_routes};
use crate::store::KeyValueStore;
use crate::wizard::{ListingPublisher, WizardEngine, WizardRouteState, wizard_routes};

/// Long-lived services shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    pub session: Arc<SessionStore>,
    pub wizard: Arc<WizardEngine>,
    pub catalog: Arc<dyn Catalog>,
    pub deck: Arc<Mutex<DiscoveryDeck>>,
}

impl AppServices {
    /// Construct the services and hydrate the session before returning.
    pub async fn start(
        kv: Arc<dyn KeyValueStore>,
        auth: Arc<dyn AuthProvider>,
        publisher: Arc<dyn ListingPublisher>,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        let session = Arc::new(SessionStore::new(kv, auth));
        session.hydrate().await;

        Self {
            session,
            wizard: Arc::new(WizardEngine::new(publisher)),
            deck: Arc::new(Mutex::new(DiscoveryDeck::new(Arc::clone(&catalog), None))),
            catalog,
        }
    }

    /// The full JSON API.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health))
            .merge(session_routes(SessionRouteState {
                session: Arc::clone(&self.session),
                catalog: Arc::clone(&self.catalog),
            }))
            .merge(catalog_routes(CatalogRouteState {
                catalog: Arc::clone(&self.catalog),
                session: Arc::clone(&self.session),
                deck: Arc::clone(&self.deck),
            }))
            .merge(wizard_routes(WizardRouteState {
                engine: Arc::clone(&self.wizard),
            }))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
