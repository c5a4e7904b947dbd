use devis_travaux::workflows::directory::{
    Address, Broker, DirectoryError, DirectoryRepository, InteractionKind, Professional,
};
use devis_travaux::workflows::leads::{
    LeadId, LeadNotification, LeadNotifier, LeadRecord, LeadRepository, LeadStatus, NotifyError,
    RepositoryError,
};
use devis_travaux::workflows::quotes::{
    QuoteId, QuoteRepository, QuoteRequest, QuoteStatus, QuoteStoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for InMemoryLeadRepository {
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
        match guard.get_mut(id) {
            Some(record) => {
                record.status = status;
                Ok(record.clone())
            }
            None => Err(RepositoryError::NotFound),
        }
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
pub(crate) struct InMemoryQuoteRepository {
    quotes: Arc<Mutex<HashMap<QuoteId, QuoteRequest>>>,
}

impl QuoteRepository for InMemoryQuoteRepository {
    fn insert(&self, quote: QuoteRequest) -> Result<QuoteRequest, QuoteStoreError> {
        let mut guard = self.quotes.lock().expect("repository mutex poisoned");
        if guard.contains_key(&quote.id) {
            return Err(QuoteStoreError::Conflict);
        }
        guard.insert(quote.id.clone(), quote.clone());
        Ok(quote)
    }

    fn update_status(
        &self,
        id: &QuoteId,
        status: QuoteStatus,
    ) -> Result<QuoteRequest, QuoteStoreError> {
        let mut guard = self.quotes.lock().expect("repository mutex poisoned");
        let quote = guard.get_mut(id).ok_or(QuoteStoreError::NotFound)?;
        quote.status = status;
        Ok(quote.clone())
    }

    fn fetch(&self, id: &QuoteId) -> Result<Option<QuoteRequest>, QuoteStoreError> {
        let guard = self.quotes.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<QuoteRequest>, QuoteStoreError> {
        let guard = self.quotes.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

/// Keeps outgoing lead e-mails in memory until a mail transport is wired in.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNotifier {
    outbox: Arc<Mutex<Vec<LeadNotification>>>,
}

impl LeadNotifier for InMemoryNotifier {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError> {
        let mut guard = self.outbox.lock().expect("notifier mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryNotifier {
    pub(crate) fn outbox(&self) -> Vec<LeadNotification> {
        self.outbox.lock().expect("notifier mutex poisoned").clone()
    }
}

#[derive(Clone)]
pub(crate) struct InMemoryDirectory {
    professionals: Arc<Mutex<Vec<Professional>>>,
    brokers: Arc<Mutex<Vec<Broker>>>,
}

impl InMemoryDirectory {
    /// A handful of listings so the search pages have something to show.
    pub(crate) fn seeded() -> Self {
        Self {
            professionals: Arc::new(Mutex::new(vec![
                professional(
                    "pro-1",
                    "Atelier Garonne",
                    "33",
                    "Nouvelle-Aquitaine",
                    9,
                    &["Salle de bain", "Carrelage"],
                ),
                professional(
                    "pro-2",
                    "Habitat Énergie Nantes",
                    "44",
                    "Pays de la Loire",
                    12,
                    &["Pompe à chaleur", "Menuiseries"],
                ),
                professional(
                    "pro-3",
                    "Parquets du Dauphiné",
                    "38",
                    "Auvergne-Rhône-Alpes",
                    25,
                    &["Parquet", "Peinture"],
                ),
                professional(
                    "pro-4",
                    "Rénov'Lyon Bâtiment",
                    "69",
                    "Auvergne-Rhône-Alpes",
                    18,
                    &["Rénovation complète", "Isolation"],
                ),
            ])),
            brokers: Arc::new(Mutex::new(vec![
                broker(
                    "broker-1",
                    ("Sophie", "Lambert"),
                    14,
                    ("12", "rue de la République", "Lyon", "69002"),
                ),
                broker(
                    "broker-2",
                    ("Thomas", "Girard"),
                    6,
                    ("3", "cours de l'Intendance", "Bordeaux", "33000"),
                ),
                broker(
                    "broker-3",
                    ("Nadia", "Benali"),
                    21,
                    ("48", "quai de la Fosse", "Nantes", "44000"),
                ),
                broker(
                    "broker-4",
                    ("Marc", "Fontaine"),
                    9,
                    ("7", "avenue Jean Jaurès", "Lyon", "69007"),
                ),
            ])),
        }
    }
}

fn professional(
    id: &str,
    name: &str,
    department: &str,
    region: &str,
    experience: u32,
    specialties: &[&str],
) -> Professional {
    Professional {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("contact@{id}.example.fr"),
        phone: "0400000000".to_string(),
        department: department.to_string(),
        region: region.to_string(),
        description: String::new(),
        experience,
        specialties: specialties.iter().map(|value| value.to_string()).collect(),
        certifications: vec!["RGE".to_string()],
        completed_projects: experience * 12,
        call_clicks: 0,
        message_clicks: 0,
    }
}

fn broker(
    id: &str,
    (first_name, last_name): (&str, &str),
    experience_years: u32,
    (street_number, street_name, city, postal_code): (&str, &str, &str, &str),
) -> Broker {
    Broker {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}@courtage.example.fr", last_name.to_lowercase()),
        phone: "0900000000".to_string(),
        license_number: format!("ORIAS-{id}"),
        experience_years,
        description: String::new(),
        address: Some(Address {
            street_number: street_number.to_string(),
            street_name: street_name.to_string(),
            city: city.to_string(),
            postal_code: postal_code.to_string(),
        }),
    }
}

impl DirectoryRepository for InMemoryDirectory {
    fn professionals(&self) -> Result<Vec<Professional>, DirectoryError> {
        let guard = self.professionals.lock().expect("directory mutex poisoned");
        Ok(guard.clone())
    }

    fn brokers(&self) -> Result<Vec<Broker>, DirectoryError> {
        let guard = self.brokers.lock().expect("directory mutex poisoned");
        Ok(guard.clone())
    }

    fn record_interaction(
        &self,
        professional_id: &str,
        kind: InteractionKind,
    ) -> Result<Professional, DirectoryError> {
        let mut guard = self.professionals.lock().expect("directory mutex poisoned");
        let professional = guard
            .iter_mut()
            .find(|professional| professional.id == professional_id)
            .ok_or(DirectoryError::NotFound)?;
        match kind {
            InteractionKind::Call => professional.call_clicks += 1,
            InteractionKind::Message => professional.message_clicks += 1,
        }
        Ok(professional.clone())
    }

    fn insert_professional(
        &self,
        professional: Professional,
    ) -> Result<Professional, DirectoryError> {
        let mut guard = self.professionals.lock().expect("directory mutex poisoned");
        if guard.iter().any(|existing| existing.id == professional.id) {
            return Err(DirectoryError::Conflict);
        }
        guard.push(professional.clone());
        guard.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(professional)
    }

    fn update_professional(
        &self,
        professional: Professional,
    ) -> Result<Professional, DirectoryError> {
        let mut guard = self.professionals.lock().expect("directory mutex poisoned");
        let stored = guard
            .iter_mut()
            .find(|existing| existing.id == professional.id)
            .ok_or(DirectoryError::NotFound)?;
        *stored = professional.clone();
        guard.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(professional)
    }

    fn delete_professional(&self, professional_id: &str) -> Result<(), DirectoryError> {
        let mut guard = self.professionals.lock().expect("directory mutex poisoned");
        let before = guard.len();
        guard.retain(|professional| professional.id != professional_id);
        if guard.len() == before {
            return Err(DirectoryError::NotFound);
        }
        Ok(())
    }

    fn insert_broker(&self, broker: Broker) -> Result<Broker, DirectoryError> {
        let mut guard = self.brokers.lock().expect("directory mutex poisoned");
        if guard.iter().any(|existing| existing.id == broker.id) {
            return Err(DirectoryError::Conflict);
        }
        guard.push(broker.clone());
        Ok(broker)
    }

    fn update_broker(&self, broker: Broker) -> Result<Broker, DirectoryError> {
        let mut guard = self.brokers.lock().expect("directory mutex poisoned");
        let stored = guard
            .iter_mut()
            .find(|existing| existing.id == broker.id)
            .ok_or(DirectoryError::NotFound)?;
        *stored = broker.clone();
        Ok(broker)
    }

    fn delete_broker(&self, broker_id: &str) -> Result<(), DirectoryError> {
        let mut guard = self.brokers.lock().expect("directory mutex poisoned");
        let before = guard.len();
        guard.retain(|broker| broker.id != broker_id);
        if guard.len() == before {
            return Err(DirectoryError::NotFound);
        }
        Ok(())
    }
}
