//! Persistence layer — the durable key-value store behind the session.

pub mod libsql_backend;
pub mod migrations;
pub mod traits;

pub use libsql_backend::LibSqlStore;
pub use traits::KeyValueStore;
