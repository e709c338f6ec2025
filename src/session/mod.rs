//! Session — who is using the app and what they favorited.
//!
//! The session is hydrated once at startup from the key-value store and
//! written through on every mutation. It does not know about the listing
//! wizard.

pub mod auth;
pub mod model;
pub mod routes;
pub mod store;

pub use auth::{AuthProvider, PlaceholderAuthProvider};
pub use model::{Profile, SessionSnapshot, storage_keys};
pub use routes::{SessionRouteState, session_routes};
pub use store::SessionStore;
