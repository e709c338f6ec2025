//! Listing-creation wizard.
//!
//! A listing is built up over eight steps. The engine holds the draft and
//! the step cursor; it never validates fields, that belongs to whoever
//! renders each step. Nothing here is persisted.

pub mod engine;
pub mod model;
pub mod publisher;
pub mod routes;
pub mod state;

pub use engine::WizardEngine;
pub use model::{Address, EmploymentType, ListingDraft, ListingDraftPatch, ListingType};
pub use publisher::{ListingPublisher, NoopPublisher, PublishReceipt};
pub use routes::{WizardRouteState, wizard_routes};
pub use state::{FIRST_STEP, ListingCategory, MAX_STEPS, StepInfo};
