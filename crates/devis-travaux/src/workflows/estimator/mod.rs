//! Branching renovation questionnaire producing a cost estimate.
//!
//! Categories are static question graphs. A walk starts at a category's first
//! question and accumulates option values until an option without a successor
//! ends it. "Other" options ask for a quantity that is priced through a
//! [`FormulaTable`].

mod blueprint;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod formula;
pub mod router;
pub mod session;

pub use catalog::Catalog;
pub use domain::{AnswerOption, Category, CategorySummary, Question};
pub use error::{CatalogError, EstimatorError};
pub use formula::{CustomValueFormula, FormulaTable};
pub use router::estimator_router;
pub use session::{
    parse_quantity, EstimationSession, Estimator, FinalEstimate, Progress, RecordedAnswer,
    SessionState, SessionView,
};
