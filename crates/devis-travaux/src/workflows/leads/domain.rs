use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored contact requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Contact details sent from the estimate page or a professional's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Two-digit département number.
    pub postal_code: String,
    pub project_type: String,
    pub estimated_budget: f64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub professional_name: Option<String>,
}

/// Follow-up state of a lead as handled by the admin team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    Pending,
    Assigned,
    Contacted,
    Completed,
    Cancelled,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::Pending,
        LeadStatus::Assigned,
        LeadStatus::Contacted,
        LeadStatus::Completed,
        LeadStatus::Cancelled,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            LeadStatus::Pending => "pending",
            LeadStatus::Assigned => "assigned",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Completed => "completed",
            LeadStatus::Cancelled => "cancelled",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::Pending => "En attente",
            LeadStatus::Assigned => "Assigné",
            LeadStatus::Contacted => "Contacté",
            LeadStatus::Completed => "Terminé",
            LeadStatus::Cancelled => "Annulé",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(value))
    }

    /// Assigned and contacted leads are both being worked on.
    pub const fn is_in_progress(self) -> bool {
        matches!(self, LeadStatus::Assigned | LeadStatus::Contacted)
    }
}

/// Stored lead, as returned to the admin page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub postal_code: String,
    pub project_type: String,
    pub estimated_budget: f64,
    pub message: Option<String>,
    pub professional_name: Option<String>,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn view(&self) -> LeadView {
        LeadView {
            lead: self.clone(),
            status_label: self.status.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadView {
    #[serde(flatten)]
    pub lead: LeadRecord,
    pub status_label: &'static str,
}

/// Admin listing filters. Empty search and no status mean "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LeadFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<LeadStatus>,
}

impl LeadFilter {
    pub fn matches(&self, lead: &LeadRecord) -> bool {
        if let Some(status) = self.status {
            if lead.status != status {
                return false;
            }
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
        let professional = lead.professional_name.as_deref().unwrap_or_default();
        let text_match = [
            lead.first_name.as_str(),
            lead.last_name.as_str(),
            lead.email.as_str(),
            professional,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle));

        text_match || lead.postal_code.contains(term)
    }
}

/// Counters shown above the admin listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LeadCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl LeadCounts {
    pub fn tally<'a>(leads: impl IntoIterator<Item = &'a LeadRecord>) -> Self {
        leads
            .into_iter()
            .fold(LeadCounts::default(), |mut counts, lead| {
                counts.total += 1;
                match lead.status {
                    LeadStatus::Pending => counts.pending += 1,
                    LeadStatus::Completed => counts.completed += 1,
                    status if status.is_in_progress() => counts.in_progress += 1,
                    _ => {}
                }
                counts
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadListing {
    pub leads: Vec<LeadView>,
    pub counts: LeadCounts,
}
