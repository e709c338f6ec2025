//! Session data models.

use serde::{Deserialize, Serialize};

/// The signed-in user.
///
/// Stored in the key-value store as JSON under [`storage_keys::USER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// In-memory session state.
///
/// `user` is `Some` exactly when `authenticated` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SessionState {
    pub authenticated: bool,
    pub user: Option<Profile>,
    pub favorite_ids: Vec<String>,
}

/// Point-in-time view of the session handed to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// False until hydration has finished.
    pub ready: bool,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Profile>,
    pub favorite_ids: Vec<String>,
    /// Keys whose latest value has not reached durable storage yet.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pending_writes: Vec<&'static str>,
}

/// Keys used for session persistence.
pub mod storage_keys {
    /// `"true"` while signed in; absent otherwise.
    pub const AUTHENTICATED: &str = "session.authenticated";
    /// JSON-encoded [`super::Profile`]; absent when signed out.
    pub const USER: &str = "session.user";
    /// JSON array of favorited catalog ids, in insertion order.
    pub const FAVORITES: &str = "session.favorites";
}
