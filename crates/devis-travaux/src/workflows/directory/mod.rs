//! Professional and broker directory: public search plus the admin listing editor.

pub mod admin;
pub mod domain;
pub mod router;
pub mod search;
pub mod service;

pub use admin::ListingValidationError;
pub use domain::{
    Address, Broker, BrokerPage, BrokerProfile, BrokerQuery, BrokerSortField, InteractionKind,
    Professional, ProfessionalProfile, SortOrder, BROKERS_PER_PAGE,
};
pub use router::directory_router;
pub use search::{search_brokers, search_professionals};
pub use service::{DirectoryError, DirectoryRepository, DirectoryService};
