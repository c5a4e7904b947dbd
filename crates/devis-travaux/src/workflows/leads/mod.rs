//! Contact requests raised after an estimate, plus the admin follow-up surface.

pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    LeadCounts, LeadFilter, LeadId, LeadListing, LeadRecord, LeadStatus, LeadSubmission,
    LeadView,
};
pub use intake::LeadValidationError;
pub use repository::{
    LeadNotification, LeadNotifier, LeadRepository, NotifyError, RepositoryError,
};
pub use router::lead_router;
pub use service::{LeadService, LeadServiceError, DEFAULT_NOTIFY_ADDRESS};
