use super::domain::{QuoteId, QuoteRequest, QuoteStatus};

/// Storage for submitted quote requests.
pub trait QuoteRepository: Send + Sync {
    fn insert(&self, quote: QuoteRequest) -> Result<QuoteRequest, QuoteStoreError>;
    fn update_status(
        &self,
        id: &QuoteId,
        status: QuoteStatus,
    ) -> Result<QuoteRequest, QuoteStoreError>;
    fn fetch(&self, id: &QuoteId) -> Result<Option<QuoteRequest>, QuoteStoreError>;
    fn list(&self) -> Result<Vec<QuoteRequest>, QuoteStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteStoreError {
    #[error("quote request already exists")]
    Conflict,
    #[error("quote request not found")]
    NotFound,
    #[error("quote storage unavailable: {0}")]
    Unavailable(String),
}
