use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::admin::{normalize_broker, normalize_professional, ListingValidationError};
use super::domain::{
    Broker, BrokerPage, BrokerProfile, BrokerQuery, InteractionKind, Professional,
    ProfessionalProfile,
};
use super::search::{search_brokers, search_professionals};

/// Storage for the professional and broker listings.
pub trait DirectoryRepository: Send + Sync {
    /// Professionals ordered by name.
    fn professionals(&self) -> Result<Vec<Professional>, DirectoryError>;
    fn brokers(&self) -> Result<Vec<Broker>, DirectoryError>;
    fn record_interaction(
        &self,
        professional_id: &str,
        kind: InteractionKind,
    ) -> Result<Professional, DirectoryError>;

    fn insert_professional(&self, professional: Professional)
        -> Result<Professional, DirectoryError>;
    /// Replaces the stored listing with the same id.
    fn update_professional(&self, professional: Professional)
        -> Result<Professional, DirectoryError>;
    fn delete_professional(&self, professional_id: &str) -> Result<(), DirectoryError>;

    fn insert_broker(&self, broker: Broker) -> Result<Broker, DirectoryError>;
    fn update_broker(&self, broker: Broker) -> Result<Broker, DirectoryError>;
    fn delete_broker(&self, broker_id: &str) -> Result<(), DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("listing not found")]
    NotFound,
    #[error("listing already exists")]
    Conflict,
    #[error(transparent)]
    Invalid(#[from] ListingValidationError),
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

pub struct DirectoryService<D> {
    repository: Arc<D>,
}

static LISTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_listing_id(prefix: &str) -> String {
    let id = LISTING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id:06}")
}

impl<D> DirectoryService<D>
where
    D: DirectoryRepository + 'static,
{
    pub fn new(repository: Arc<D>) -> Self {
        Self { repository }
    }

    pub fn find_professionals(&self, query: &str) -> Result<Vec<Professional>, DirectoryError> {
        let professionals = self.repository.professionals()?;
        let found = search_professionals(&professionals, query);
        debug!(query, results = found.len(), "professional search");
        Ok(found)
    }

    pub fn find_brokers(&self, query: &BrokerQuery) -> Result<BrokerPage, DirectoryError> {
        let brokers = self.repository.brokers()?;
        Ok(search_brokers(&brokers, query))
    }

    /// Count a call or message click on a professional's profile.
    pub fn track_interaction(
        &self,
        professional_id: &str,
        kind: InteractionKind,
    ) -> Result<Professional, DirectoryError> {
        self.repository.record_interaction(professional_id, kind)
    }

    pub fn create_professional(
        &self,
        profile: ProfessionalProfile,
    ) -> Result<Professional, DirectoryError> {
        let profile = normalize_professional(profile)?;
        let created = self
            .repository
            .insert_professional(profile.into_professional(next_listing_id("pro")))?;
        info!(
            professional = %created.id,
            department = %created.department,
            "professional added"
        );
        Ok(created)
    }

    /// Edits keep the listing's call and message counters.
    pub fn update_professional(
        &self,
        professional_id: &str,
        profile: ProfessionalProfile,
    ) -> Result<Professional, DirectoryError> {
        let profile = normalize_professional(profile)?;
        let current = self
            .repository
            .professionals()?
            .into_iter()
            .find(|professional| professional.id == professional_id)
            .ok_or(DirectoryError::NotFound)?;
        let updated = self
            .repository
            .update_professional(profile.apply_to(current))?;
        info!(professional = %updated.id, "professional updated");
        Ok(updated)
    }

    pub fn delete_professional(&self, professional_id: &str) -> Result<(), DirectoryError> {
        self.repository.delete_professional(professional_id)?;
        info!(professional = professional_id, "professional removed");
        Ok(())
    }

    pub fn create_broker(&self, profile: BrokerProfile) -> Result<Broker, DirectoryError> {
        let profile = normalize_broker(profile)?;
        let created = self
            .repository
            .insert_broker(profile.into_broker(next_listing_id("broker")))?;
        info!(broker = %created.id, "broker added");
        Ok(created)
    }

    pub fn update_broker(
        &self,
        broker_id: &str,
        profile: BrokerProfile,
    ) -> Result<Broker, DirectoryError> {
        let profile = normalize_broker(profile)?;
        let updated = self
            .repository
            .update_broker(profile.into_broker(broker_id.to_string()))?;
        info!(broker = %updated.id, "broker updated");
        Ok(updated)
    }

    pub fn delete_broker(&self, broker_id: &str) -> Result<(), DirectoryError> {
        self.repository.delete_broker(broker_id)?;
        info!(broker = broker_id, "broker removed");
        Ok(())
    }
}
