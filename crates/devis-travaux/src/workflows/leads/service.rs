use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use super::domain::{
    LeadCounts, LeadFilter, LeadId, LeadListing, LeadRecord, LeadStatus, LeadSubmission,
};
use super::intake::{record_from_submission, LeadValidationError};
use super::repository::{LeadNotification, LeadNotifier, LeadRepository, RepositoryError};

pub const DEFAULT_NOTIFY_ADDRESS: &str = "contact@devistravauxfacile.fr";

/// Validates, stores and announces contact requests; backs the admin listing.
pub struct LeadService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    notify_address: String,
}

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

impl<R, N> LeadService<R, N>
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self::with_notify_address(repository, notifier, DEFAULT_NOTIFY_ADDRESS)
    }

    pub fn with_notify_address(
        repository: Arc<R>,
        notifier: Arc<N>,
        notify_address: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            notifier,
            notify_address: notify_address.into(),
        }
    }

    /// Store a new lead. A failed notification is logged; the stored lead still counts.
    pub fn submit(&self, submission: LeadSubmission) -> Result<LeadRecord, LeadServiceError> {
        let record = record_from_submission(submission, next_lead_id(), Utc::now())?;
        let stored = self.repository.insert(record)?;

        info!(
            lead = %stored.id.0,
            project = %stored.project_type,
            departement = %stored.postal_code,
            "lead stored"
        );

        if let Err(error) = self.notifier.notify(self.notification_for(&stored)) {
            warn!(lead = %stored.id.0, %error, "lead notification failed");
        }

        Ok(stored)
    }

    pub fn get(&self, id: &LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Newest first; counts cover every stored lead regardless of the filter.
    pub fn list(&self, filter: &LeadFilter) -> Result<LeadListing, LeadServiceError> {
        let mut all = self.repository.list()?;
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });

        let counts = LeadCounts::tally(&all);
        let leads = all
            .iter()
            .filter(|lead| filter.matches(lead))
            .map(LeadRecord::view)
            .collect();

        Ok(LeadListing { leads, counts })
    }

    pub fn update_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<LeadRecord, LeadServiceError> {
        let updated = self.repository.update_status(id, status)?;
        info!(lead = %updated.id.0, status = status.code(), "lead status updated");
        Ok(updated)
    }

    fn notification_for(&self, lead: &LeadRecord) -> LeadNotification {
        LeadNotification {
            to: self.notify_address.clone(),
            subject: format!("Nouvelle demande de devis - {}", lead.project_type),
            data: json!({
                "id": lead.id.0,
                "name": lead.full_name(),
                "email": lead.email,
                "phone": lead.phone,
                "postal_code": lead.postal_code,
                "project_type": lead.project_type,
                "estimated_budget": lead.estimated_budget,
                "message": lead.message,
                "professional_name": lead.professional_name,
            }),
        }
    }
}

/// Error raised by the lead service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Validation(#[from] LeadValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
