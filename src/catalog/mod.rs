//! Catalog — the read-only listings the app displays, plus the discovery deck.

pub mod deck;
pub mod fixtures;
pub mod model;
pub mod routes;

pub use deck::{DiscoveryDeck, SwipeDirection, SwipeOutcome};
pub use fixtures::StaticCatalog;
pub use model::{Catalog, CatalogItem, ItemKind};
pub use routes::{CatalogRouteState, catalog_routes};
