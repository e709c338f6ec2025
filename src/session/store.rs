//! SessionStore — authentication status and favorites, written through to
//! the key-value store.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogItem};
use crate::error::{DatabaseError, SessionError};
use crate::store::KeyValueStore;

use super::auth::AuthProvider;
use super::model::{Profile, SessionSnapshot, SessionState, storage_keys};

/// Single source of truth for who is signed in and what they favorited.
///
/// Every mutation updates memory first and then flushes the affected keys
/// before returning. A failed flush of the caller's own keys is reported to
/// the caller and the key stays pending; the next mutation (or
/// [`SessionStore::flush_pending`]) retries it.
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
    auth: Arc<dyn AuthProvider>,
    state: RwLock<SessionState>,
    pending: Mutex<BTreeSet<&'static str>>,
    ready: AtomicBool,
}

impl SessionStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            kv,
            auth,
            state: RwLock::new(SessionState::default()),
            pending: Mutex::new(BTreeSet::new()),
            ready: AtomicBool::new(false),
        }
    }

    /// Load persisted session state.
    ///
    /// The three keys are read concurrently. Missing, unreadable, or
    /// malformed values fall back to defaults; nothing here fails.
    pub async fn hydrate(&self) {
        let (auth_flag, user, favorites) = tokio::join!(
            self.kv.get(storage_keys::AUTHENTICATED),
            self.kv.get(storage_keys::USER),
            self.kv.get(storage_keys::FAVORITES),
        );

        let auth_flag = match read_value(storage_keys::AUTHENTICATED, auth_flag).as_deref() {
            Some("true") => true,
            Some(other) => {
                warn!(
                    key = storage_keys::AUTHENTICATED,
                    value = other,
                    "Unexpected auth flag, treating as signed out"
                );
                false
            }
            None => false,
        };
        let user: Option<Profile> = read_value(storage_keys::USER, user)
            .and_then(|raw| parse_json(storage_keys::USER, &raw));
        let favorite_ids = read_value(storage_keys::FAVORITES, favorites)
            .and_then(|raw| parse_json::<Vec<String>>(storage_keys::FAVORITES, &raw))
            .map(dedup_in_order)
            .unwrap_or_default();

        let authenticated = auth_flag && user.is_some();
        if auth_flag && !authenticated {
            warn!("Auth flag set without a readable profile, treating as signed out");
        }

        {
            let mut state = self.state.write().await;
            *state = SessionState {
                authenticated,
                user: if authenticated { user } else { None },
                favorite_ids,
            };
            info!(
                authenticated = state.authenticated,
                favorites = state.favorite_ids.len(),
                "Session hydrated"
            );
        }

        self.ready.store(true, Ordering::Release);
    }

    /// Whether [`SessionStore::hydrate`] has completed.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.authenticated
    }

    pub async fn user(&self) -> Option<Profile> {
        self.state.read().await.user.clone()
    }

    pub async fn favorite_ids(&self) -> Vec<String> {
        self.state.read().await.favorite_ids.clone()
    }

    pub async fn is_favorite(&self, id: &str) -> bool {
        self.state.read().await.favorite_ids.iter().any(|f| f == id)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let pending: Vec<&'static str> = self.pending.lock().await.iter().copied().collect();
        let state = self.state.read().await;
        SessionSnapshot {
            ready: self.is_ready(),
            authenticated: state.authenticated,
            user: state.user.clone(),
            favorite_ids: state.favorite_ids.clone(),
            pending_writes: pending,
        }
    }

    /// Keys whose latest in-memory value has not been persisted.
    pub async fn pending_writes(&self) -> Vec<&'static str> {
        self.pending.lock().await.iter().copied().collect()
    }

    /// Sign in through the configured provider.
    ///
    /// On a persistence failure the session is still signed in in memory.
    pub async fn sign_in(&self, provider_hint: &str) -> Result<Profile, SessionError> {
        let profile = self.auth.authenticate(provider_hint).await?;

        {
            let mut state = self.state.write().await;
            state.authenticated = true;
            state.user = Some(profile.clone());
        }
        info!(user_id = %profile.id, provider = provider_hint, "Signed in");

        self.write_through(&[storage_keys::AUTHENTICATED, storage_keys::USER])
            .await?;
        Ok(profile)
    }

    /// Sign out. Favorites are kept.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        {
            let mut state = self.state.write().await;
            state.authenticated = false;
            state.user = None;
        }
        info!("Signed out");

        self.write_through(&[storage_keys::AUTHENTICATED, storage_keys::USER])
            .await
    }

    /// Append `id` to the favorites. Returns whether it was newly added.
    pub async fn add_favorite(&self, id: &str) -> Result<bool, SessionError> {
        let added = {
            let mut state = self.state.write().await;
            if state.favorite_ids.iter().any(|f| f == id) {
                false
            } else {
                state.favorite_ids.push(id.to_string());
                true
            }
        };
        debug!(id, added, "add_favorite");

        if added {
            self.write_through(&[storage_keys::FAVORITES]).await?;
        }
        Ok(added)
    }

    /// Remove `id` from the favorites. Returns whether it was present.
    pub async fn remove_favorite(&self, id: &str) -> Result<bool, SessionError> {
        let removed = {
            let mut state = self.state.write().await;
            let before = state.favorite_ids.len();
            state.favorite_ids.retain(|f| f != id);
            state.favorite_ids.len() != before
        };
        debug!(id, removed, "remove_favorite");

        if removed {
            self.write_through(&[storage_keys::FAVORITES]).await?;
        }
        Ok(removed)
    }

    /// Flip membership of `id`. Returns whether it is now a favorite.
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool, SessionError> {
        if self.is_favorite(id).await {
            self.remove_favorite(id).await.map(|_| false)
        } else {
            self.add_favorite(id).await.map(|_| true)
        }
    }

    /// Favorited items that still exist in `catalog`, in favorite order.
    pub async fn list_favorites(&self, catalog: &dyn Catalog) -> Vec<CatalogItem> {
        let state = self.state.read().await;
        state
            .favorite_ids
            .iter()
            .filter_map(|id| catalog.get(id).cloned())
            .collect()
    }

    /// Retry every pending key. Returns the first failure, if any.
    pub async fn flush_pending(&self) -> Result<(), SessionError> {
        match self.flush(&[]).await.into_iter().next() {
            Some((key, source)) => Err(SessionError::Persistence { key, source }),
            None => Ok(()),
        }
    }

    /// Mark `keys` dirty and flush everything pending.
    ///
    /// Only a failure on one of `keys` fails the call. Older pending keys
    /// that still fail stay pending and show up in `pending_writes`.
    async fn write_through(&self, keys: &[&'static str]) -> Result<(), SessionError> {
        match self
            .flush(keys)
            .await
            .into_iter()
            .find(|(key, _)| keys.contains(key))
        {
            Some((key, source)) => Err(SessionError::Persistence { key, source }),
            None => Ok(()),
        }
    }

    /// Persist `keys` plus every pending key. Returns the keys that failed.
    async fn flush(&self, keys: &[&'static str]) -> Vec<(&'static str, DatabaseError)> {
        let mut pending = self.pending.lock().await;
        pending.extend(keys.iter().copied());

        let mut failures = Vec::new();
        let dirty: Vec<&'static str> = pending.iter().copied().collect();
        for key in dirty {
            match self.persist_key(key).await {
                Ok(()) => {
                    pending.remove(key);
                }
                Err(source) => {
                    warn!(key, error = %source, "Session write failed, will retry");
                    failures.push((key, source));
                }
            }
        }
        failures
    }

    /// Write the current in-memory value of `key`.
    async fn persist_key(&self, key: &'static str) -> Result<(), DatabaseError> {
        let value = {
            let state = self.state.read().await;
            match key {
                storage_keys::AUTHENTICATED => state.authenticated.then(|| "true".to_string()),
                storage_keys::USER => state
                    .user
                    .as_ref()
                    .map(serde_json::to_string)
                    .transpose()
                    .map_err(|e| DatabaseError::Serialization(e.to_string()))?,
                storage_keys::FAVORITES => Some(
                    serde_json::to_string(&state.favorite_ids)
                        .map_err(|e| DatabaseError::Serialization(e.to_string()))?,
                ),
                _ => return Ok(()),
            }
        };

        match value {
            Some(value) => self.kv.set(key, &value).await,
            None => self.kv.remove(key).await.map(|_| ()),
        }
    }
}

fn read_value(
    key: &'static str,
    result: Result<Option<String>, DatabaseError>,
) -> Option<String> {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Failed to read session key, using default");
            None
        }
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(key: &'static str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Malformed session value, ignoring");
            None
        }
    }
}

fn dedup_in_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
