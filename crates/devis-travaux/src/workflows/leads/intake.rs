use chrono::{DateTime, Utc};

use super::domain::{LeadId, LeadRecord, LeadStatus, LeadSubmission};

/// Reasons a contact request is refused before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("postal code must contain exactly two digits (département)")]
    InvalidPostalCode,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("estimated budget must be a non-zero amount")]
    InvalidBudget,
}

/// Normalizes a submission into a pending lead record.
pub fn record_from_submission(
    submission: LeadSubmission,
    id: LeadId,
    created_at: DateTime<Utc>,
) -> Result<LeadRecord, LeadValidationError> {
    let first_name = required("first_name", &submission.first_name)?;
    let last_name = required("last_name", &submission.last_name)?;
    let email = required("email", &submission.email)?;
    let phone = required("phone", &submission.phone)?;
    let postal_code = required("postal_code", &submission.postal_code)?;
    let project_type = required("project_type", &submission.project_type)?;

    if !is_plausible_email(&email) {
        return Err(LeadValidationError::InvalidEmail);
    }

    let postal_code = departement_code(&postal_code)?;

    if !submission.estimated_budget.is_finite() || submission.estimated_budget == 0.0 {
        return Err(LeadValidationError::InvalidBudget);
    }

    Ok(LeadRecord {
        id,
        first_name,
        last_name,
        email,
        phone,
        postal_code,
        project_type,
        estimated_budget: submission.estimated_budget,
        message: optional(submission.message),
        professional_name: optional(submission.professional_name),
        status: LeadStatus::Pending,
        created_at,
    })
}

fn required(field: &'static str, value: &str) -> Result<String, LeadValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(LeadValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn departement_code(raw: &str) -> Result<String, LeadValidationError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 2 {
        Ok(digits)
    } else {
        Err(LeadValidationError::InvalidPostalCode)
    }
}

fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}
