use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::leads::domain::{LeadId, LeadRecord, LeadStatus, LeadSubmission};
use crate::workflows::leads::repository::{
    LeadNotification, LeadNotifier, LeadRepository, NotifyError, RepositoryError,
};
use crate::workflows::leads::service::LeadService;

pub(super) fn submission() -> LeadSubmission {
    LeadSubmission {
        first_name: "Claire".to_string(),
        last_name: "Moreau".to_string(),
        email: "claire.moreau@example.fr".to_string(),
        phone: "0612345678".to_string(),
        postal_code: "69".to_string(),
        project_type: "walls".to_string(),
        estimated_budget: 560.0,
        message: Some("Salon et couloir".to_string()),
        professional_name: None,
    }
}

pub(super) fn submission_named(first_name: &str, postal_code: &str) -> LeadSubmission {
    LeadSubmission {
        first_name: first_name.to_string(),
        postal_code: postal_code.to_string(),
        ..submission()
    }
}

pub(super) fn build_service() -> (
    LeadService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = LeadService::with_notify_address(
        repository.clone(),
        notifier.clone(),
        "admin@example.fr",
    );
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for MemoryRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        record.status = status;
        Ok(record.clone())
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<LeadNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl LeadNotifier for MemoryNotifier {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl LeadNotifier for FailingNotifier {
    fn notify(&self, _notification: LeadNotification) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl LeadRepository for ConflictRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update_status(
        &self,
        _id: &LeadId,
        _status: LeadStatus,
    ) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(
        &self,
        _id: &LeadId,
        _status: LeadStatus,
    ) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
