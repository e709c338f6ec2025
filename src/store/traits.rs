//! `KeyValueStore` trait — the durable string store behind the session.

use async_trait::async_trait;

use crate::error::DatabaseError;

/// Backend-agnostic persistent key-value store.
///
/// Values are opaque strings; callers own the serialization format, so a
/// corrupted value is their problem to detect, not the store's.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, DatabaseError>;

    /// Insert or overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), DatabaseError>;

    /// Delete `key`. Returns whether a row was removed.
    async fn remove(&self, key: &str) -> Result<bool, DatabaseError>;
}
