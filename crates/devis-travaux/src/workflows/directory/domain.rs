use serde::{Deserialize, Serialize};

/// Brokers shown per results page.
pub const BROKERS_PER_PAGE: usize = 6;

/// Renovation professional listed on the "find a pro" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub region: String,
    pub description: String,
    /// Years in the trade.
    pub experience: u32,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub completed_projects: u32,
    #[serde(default)]
    pub call_clicks: u32,
    #[serde(default)]
    pub message_clicks: u32,
}

/// Editable part of a professional listing, as sent from the admin form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub region: String,
    #[serde(default)]
    pub description: String,
    pub experience: u32,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub completed_projects: u32,
}

impl ProfessionalProfile {
    /// New listing with zeroed interaction counters.
    pub fn into_professional(self, id: String) -> Professional {
        Professional {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            department: self.department,
            region: self.region,
            description: self.description,
            experience: self.experience,
            specialties: self.specialties,
            certifications: self.certifications,
            completed_projects: self.completed_projects,
            call_clicks: 0,
            message_clicks: 0,
        }
    }

    /// Replaces the editable fields; id and click counters stay.
    pub fn apply_to(self, current: Professional) -> Professional {
        Professional {
            call_clicks: current.call_clicks,
            message_clicks: current.message_clicks,
            ..self.into_professional(current.id)
        }
    }
}

/// Contact channel used from a professional's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Call,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub city: String,
    pub postal_code: String,
}

/// Mortgage broker with an optional office address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broker {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub experience_years: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Broker fields managed from the admin page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub experience_years: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: Option<Address>,
}

impl BrokerProfile {
    pub fn into_broker(self, id: String) -> Broker {
        Broker {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            license_number: self.license_number,
            experience_years: self.experience_years,
            description: self.description,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrokerSortField {
    #[default]
    Experience,
    Name,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Broker search parameters as sent in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrokerQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub sort_by: BrokerSortField,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub page: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokerPage {
    pub brokers: Vec<Broker>,
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
}
