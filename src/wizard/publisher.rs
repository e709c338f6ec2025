//! Publishing seam — where a finished draft goes on submit.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::PublishError;

use super::model::ListingDraft;
use super::state::ListingCategory;

/// Acknowledgment returned by a publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReceipt {
    pub listing_id: Uuid,
    pub category: ListingCategory,
    pub published_at: DateTime<Utc>,
}

/// Accepts completed drafts.
#[async_trait]
pub trait ListingPublisher: Send + Sync {
    async fn publish(&self, draft: &ListingDraft) -> Result<PublishReceipt, PublishError>;
}

/// Acknowledges every draft without sending it anywhere.
#[derive(Debug, Clone, Default)]
pub struct NoopPublisher;

#[async_trait]
impl ListingPublisher for NoopPublisher {
    async fn publish(&self, draft: &ListingDraft) -> Result<PublishReceipt, PublishError> {
        let receipt = PublishReceipt {
            listing_id: Uuid::new_v4(),
            category: draft.category,
            published_at: Utc::now(),
        };
        info!(
            listing_id = %receipt.listing_id,
            category = %receipt.category,
            "Listing acknowledged (no-op publisher)"
        );
        Ok(receipt)
    }
}
