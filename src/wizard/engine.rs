//! WizardEngine — drives the listing draft through its bounded step sequence.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::WizardError;

use super::model::{ListingDraft, ListingDraftPatch};
use super::publisher::{ListingPublisher, PublishReceipt};
use super::state::{self, FIRST_STEP, MAX_STEPS, StepInfo};

/// Owns one listing-creation session.
///
/// Steps only move by one at a time and are clamped to
/// `FIRST_STEP..=MAX_STEPS`; moving past either end is a silent no-op.
/// Completeness is not enforced, any step is reachable with fields unset.
pub struct WizardEngine {
    draft: RwLock<ListingDraft>,
    publisher: Arc<dyn ListingPublisher>,
}

impl WizardEngine {
    pub fn new(publisher: Arc<dyn ListingPublisher>) -> Self {
        Self {
            draft: RwLock::new(ListingDraft::default()),
            publisher,
        }
    }

    /// Copy of the current draft.
    pub async fn draft(&self) -> ListingDraft {
        self.draft.read().await.clone()
    }

    pub async fn step(&self) -> u8 {
        self.draft.read().await.step
    }

    /// Description of the current step for the chosen category.
    pub async fn current_step_info(&self) -> StepInfo {
        let draft = self.draft.read().await;
        state::step_info(draft.step, draft.category)
    }

    /// Shallow-merge `patch` into the draft. No validation happens here.
    pub async fn update_fields(&self, patch: ListingDraftPatch) {
        if patch.is_empty() {
            return;
        }
        let mut draft = self.draft.write().await;
        patch.apply_to(&mut draft);
        debug!(step = draft.step, category = %draft.category, "Draft updated");
    }

    /// Advance one step. Returns the resulting step.
    pub async fn go_next(&self) -> u8 {
        let mut draft = self.draft.write().await;
        if draft.step < MAX_STEPS {
            draft.step += 1;
        }
        debug!(step = draft.step, "go_next");
        draft.step
    }

    /// Go back one step. Returns the resulting step.
    pub async fn go_previous(&self) -> u8 {
        let mut draft = self.draft.write().await;
        if draft.step > FIRST_STEP {
            draft.step -= 1;
        }
        debug!(step = draft.step, "go_previous");
        draft.step
    }

    /// Discard the draft and return to the first step.
    pub async fn reset(&self) {
        *self.draft.write().await = ListingDraft::default();
        debug!("Draft reset");
    }

    /// Publish the draft, then reset.
    ///
    /// The draft is only discarded after the publisher succeeds. On
    /// failure it is left untouched so the user can retry.
    pub async fn submit(&self) -> Result<PublishReceipt, WizardError> {
        let draft = self.draft().await;

        match self.publisher.publish(&draft).await {
            Ok(receipt) => {
                self.reset().await;
                info!(
                    listing_id = %receipt.listing_id,
                    category = %receipt.category,
                    "Listing submitted"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, step = draft.step, "Listing submission failed, draft kept");
                Err(WizardError::Publish(e))
            }
        }
    }
}
