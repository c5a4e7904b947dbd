//! Detailed quote requests from the multi-step form and their follow-up on the admin side.

pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    ContactPreference, IncludedService, ProjectType, QuoteCounts, QuoteFilter, QuoteId,
    QuoteListing, QuoteRequest, QuoteStatus, QuoteSubmission, QuoteView, MAX_BUDGET, MIN_BUDGET,
};
pub use intake::QuoteValidationError;
pub use repository::{QuoteRepository, QuoteStoreError};
pub use router::quote_router;
pub use service::{QuoteRequestService, QuoteServiceError};
