use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    QuoteCounts, QuoteFilter, QuoteId, QuoteListing, QuoteRequest, QuoteStatus, QuoteSubmission,
};
use super::intake::{quote_from_submission, QuoteValidationError};
use super::repository::{QuoteRepository, QuoteStoreError};

/// Takes quote requests from the public form and drives them through the admin statuses.
pub struct QuoteRequestService<R> {
    repository: Arc<R>,
}

static QUOTE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_quote_id() -> QuoteId {
    let id = QUOTE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    QuoteId(format!("quote-{id:06}"))
}

impl<R> QuoteRequestService<R>
where
    R: QuoteRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn submit(&self, submission: QuoteSubmission) -> Result<QuoteRequest, QuoteServiceError> {
        let quote = quote_from_submission(submission, next_quote_id(), Utc::now())?;
        let stored = self.repository.insert(quote)?;
        info!(
            quote = %stored.id.0,
            project = stored.project_type.label(),
            budget = stored.budget,
            "quote request stored"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &QuoteId) -> Result<QuoteRequest, QuoteServiceError> {
        let quote = self
            .repository
            .fetch(id)?
            .ok_or(QuoteStoreError::NotFound)?;
        Ok(quote)
    }

    /// Newest first. Counts and the budget total cover every request, filtered or not.
    pub fn list(&self, filter: &QuoteFilter) -> Result<QuoteListing, QuoteServiceError> {
        let mut all = self.repository.list()?;
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });

        let counts = QuoteCounts::tally(&all);
        let quotes = all
            .iter()
            .filter(|quote| filter.matches(quote))
            .map(QuoteRequest::view)
            .collect();

        Ok(QuoteListing { quotes, counts })
    }

    pub fn update_status(
        &self,
        id: &QuoteId,
        status: QuoteStatus,
    ) -> Result<QuoteRequest, QuoteServiceError> {
        let updated = self.repository.update_status(id, status)?;
        info!(quote = %updated.id.0, status = status.code(), "quote status updated");
        Ok(updated)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteServiceError {
    #[error(transparent)]
    Validation(#[from] QuoteValidationError),
    #[error(transparent)]
    Repository(#[from] QuoteStoreError),
}
