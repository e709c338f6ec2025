//! Error types for the listing shell.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Key-value store errors.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Authentication provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Unsupported sign-in provider: {0:?}")]
    UnsupportedProvider(String),
}

/// Session store errors.
///
/// `Persistence` means the in-memory session already moved on but the
/// durable copy of `key` is stale until the next successful flush.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to persist {key}: {source}")]
    Persistence {
        key: &'static str,
        #[source]
        source: DatabaseError,
    },

    #[error("Sign-in failed: {0}")]
    Auth(#[from] AuthError),
}

/// Errors reported by a listing publisher.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Listing rejected: {0}")]
    Rejected(String),

    #[error("Publisher unavailable: {0}")]
    Unavailable(String),
}

/// Wizard engine errors.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// The draft was kept; nothing was reset.
    #[error("Publishing failed, draft kept: {0}")]
    Publish(#[from] PublishError),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
