use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{LeadId, LeadRecord, LeadStatus};

/// Storage abstraction for contact requests.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn update_status(&self, id: &LeadId, status: LeadStatus)
        -> Result<LeadRecord, RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook announcing new leads (e-mail function, webhook, ...).
pub trait LeadNotifier: Send + Sync {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError>;
}

/// Payload handed to the notifier: recipient, subject and the stored lead as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadNotification {
    pub to: String,
    pub subject: String,
    pub data: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
    #[error("notification payload rejected: {0}")]
    Rejected(String),
}
