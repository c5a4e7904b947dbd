use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Budget slider bounds on the quote form, in euros.
pub const MIN_BUDGET: f64 = 1_000.0;
pub const MAX_BUDGET: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Renovation,
    Painting,
    Plumbing,
    Electricity,
    Flooring,
    Hvac,
}

impl ProjectType {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectType::Renovation => "Rénovation complète",
            ProjectType::Painting => "Peinture & Décoration",
            ProjectType::Plumbing => "Plomberie",
            ProjectType::Electricity => "Électricité",
            ProjectType::Flooring => "Sol & Carrelage",
            ProjectType::Hvac => "Climatisation & Chauffage",
        }
    }
}

/// Work packages the client can tick on the second step of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludedService {
    Design,
    Demolition,
    Materials,
    Installation,
    Finishing,
    Cleanup,
}

impl IncludedService {
    pub const fn label(self) -> &'static str {
        match self {
            IncludedService::Design => "Conception et plans",
            IncludedService::Demolition => "Démolition et préparation",
            IncludedService::Materials => "Fourniture des matériaux",
            IncludedService::Installation => "Installation complète",
            IncludedService::Finishing => "Finitions",
            IncludedService::Cleanup => "Nettoyage chantier",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPreference {
    #[default]
    Email,
    Phone,
}

/// Processing state of a quote request on the admin projects page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 4] = [
        QuoteStatus::Pending,
        QuoteStatus::Processing,
        QuoteStatus::Completed,
        QuoteStatus::Cancelled,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Processing => "processing",
            QuoteStatus::Completed => "completed",
            QuoteStatus::Cancelled => "cancelled",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            QuoteStatus::Pending => "En attente",
            QuoteStatus::Processing => "En cours",
            QuoteStatus::Completed => "Terminé",
            QuoteStatus::Cancelled => "Annulé",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(value))
    }
}

/// Multi-step quote form as posted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSubmission {
    pub project_type: ProjectType,
    pub budget: f64,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub services: Vec<IncludedService>,
    #[serde(default)]
    pub description: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub preferred_contact: ContactPreference,
    #[serde(default)]
    pub gdpr_consent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: QuoteId,
    pub project_type: ProjectType,
    pub budget: f64,
    pub deadline: Option<NaiveDate>,
    pub services: Vec<IncludedService>,
    pub description: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub preferred_contact: ContactPreference,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

impl QuoteRequest {
    pub fn client_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn view(&self) -> QuoteView {
        QuoteView {
            quote: self.clone(),
            project_label: self.project_type.label(),
            status_label: self.status.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteView {
    #[serde(flatten)]
    pub quote: QuoteRequest,
    pub project_label: &'static str,
    pub status_label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuoteFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<QuoteStatus>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
}

impl QuoteFilter {
    /// Search covers the client's name, e-mail, the description and the project label.
    pub fn matches(&self, quote: &QuoteRequest) -> bool {
        if self.status.is_some_and(|status| quote.status != status) {
            return false;
        }
        if self
            .project_type
            .is_some_and(|project_type| quote.project_type != project_type)
        {
            return false;
        }

        let Some(term) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
        else {
            return true;
        };

        let needle = term.to_lowercase();
        let client_name = quote.client_name();
        [
            client_name.as_str(),
            quote.email.as_str(),
            quote.description.as_str(),
            quote.project_type.label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Per-status counters and the summed budget shown on the projects page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QuoteCounts {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total_budget: f64,
}

impl QuoteCounts {
    pub fn tally<'a>(quotes: impl IntoIterator<Item = &'a QuoteRequest>) -> Self {
        quotes
            .into_iter()
            .fold(QuoteCounts::default(), |mut counts, quote| {
                counts.total += 1;
                counts.total_budget += quote.budget;
                match quote.status {
                    QuoteStatus::Pending => counts.pending += 1,
                    QuoteStatus::Processing => counts.processing += 1,
                    QuoteStatus::Completed => counts.completed += 1,
                    QuoteStatus::Cancelled => counts.cancelled += 1,
                }
                counts
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteListing {
    pub quotes: Vec<QuoteView>,
    pub counts: QuoteCounts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn quote(first_name: &str, project_type: ProjectType, status: QuoteStatus) -> QuoteRequest {
        QuoteRequest {
            id: QuoteId(format!("quote-{first_name}")),
            project_type,
            budget: 5_000.0,
            deadline: None,
            services: vec![IncludedService::Materials],
            description: "Salle de bain à refaire".to_string(),
            first_name: first_name.to_string(),
            last_name: "Bernard".to_string(),
            email: format!("{}@example.fr", first_name.to_lowercase()),
            phone: "0601020304".to_string(),
            company: None,
            preferred_contact: ContactPreference::Email,
            status,
            created_at: Utc.with_ymd_and_hms(2025, 4, 2, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn status_codes_and_labels_follow_the_projects_page() {
        assert_eq!(QuoteStatus::parse(" Processing"), Some(QuoteStatus::Processing));
        assert_eq!(QuoteStatus::parse("assigned"), None);
        assert_eq!(QuoteStatus::Processing.label(), "En cours");
        assert_eq!(ProjectType::Hvac.label(), "Climatisation & Chauffage");
    }

    #[test]
    fn search_reaches_the_project_label_and_description() {
        let plumbing = quote("Lucie", ProjectType::Plumbing, QuoteStatus::Pending);
        for term in ["lucie bernard", "plomberie", "salle de bain", "@example"] {
            let filter = QuoteFilter {
                search: Some(term.to_string()),
                ..QuoteFilter::default()
            };
            assert!(filter.matches(&plumbing), "{term} should match");
        }

        let filter = QuoteFilter {
            project_type: Some(ProjectType::Painting),
            ..QuoteFilter::default()
        };
        assert!(!filter.matches(&plumbing));
    }

    #[test]
    fn counts_split_every_status_and_sum_budgets() {
        let quotes = vec![
            quote("A", ProjectType::Painting, QuoteStatus::Pending),
            quote("B", ProjectType::Painting, QuoteStatus::Processing),
            quote("C", ProjectType::Flooring, QuoteStatus::Completed),
            quote("D", ProjectType::Flooring, QuoteStatus::Cancelled),
            quote("E", ProjectType::Hvac, QuoteStatus::Pending),
        ];

        assert_eq!(
            QuoteCounts::tally(&quotes),
            QuoteCounts {
                total: 5,
                pending: 2,
                processing: 1,
                completed: 1,
                cancelled: 1,
                total_budget: 25_000.0,
            }
        );
    }
}
