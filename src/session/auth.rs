//! Sign-in providers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AuthError;

use super::model::Profile;

/// Sign-in hints the placeholder provider accepts.
pub const SUPPORTED_PROVIDERS: &[&str] = &["google", "apple", "facebook", "email"];

/// Resolves a provider hint ("google", "email", ...) to a user profile.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, provider_hint: &str) -> Result<Profile, AuthError>;
}

/// Deterministic stand-in for a real OAuth/email flow.
///
/// The same hint always yields the same profile, so repeated sign-ins
/// overwrite the session with identical data.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderAuthProvider;

#[async_trait]
impl AuthProvider for PlaceholderAuthProvider {
    async fn authenticate(&self, provider_hint: &str) -> Result<Profile, AuthError> {
        let provider = provider_hint.trim().to_ascii_lowercase();
        if !SUPPORTED_PROVIDERS.contains(&provider.as_str()) {
            return Err(AuthError::UnsupportedProvider(provider_hint.to_string()));
        }

        let id = Uuid::new_v5(
            &Uuid::NAMESPACE_URL,
            format!("listing-shell:{provider}").as_bytes(),
        );

        Ok(Profile {
            id: id.to_string(),
            name: "Demo User".to_string(),
            email: format!("demo.{provider}@example.com"),
            avatar: Some(format!("avatars/{provider}.png")),
        })
    }
}
