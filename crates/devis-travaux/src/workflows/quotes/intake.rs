use chrono::{DateTime, Utc};

use super::domain::{QuoteId, QuoteRequest, QuoteStatus, QuoteSubmission, MAX_BUDGET, MIN_BUDGET};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteValidationError {
    #[error("consent to personal data processing is required")]
    ConsentRequired,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("budget must be between 1000 and 100000 euros")]
    BudgetOutOfRange,
    #[error("deadline is already past")]
    DeadlineInPast,
}

/// Checks the submitted form and turns it into a pending request.
pub fn quote_from_submission(
    submission: QuoteSubmission,
    id: QuoteId,
    created_at: DateTime<Utc>,
) -> Result<QuoteRequest, QuoteValidationError> {
    if !submission.gdpr_consent {
        return Err(QuoteValidationError::ConsentRequired);
    }

    let first_name = required("first_name", &submission.first_name)?;
    let last_name = required("last_name", &submission.last_name)?;
    let email = required("email", &submission.email)?;
    let phone = required("phone", &submission.phone)?;

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err(QuoteValidationError::InvalidEmail),
    }

    if !(MIN_BUDGET..=MAX_BUDGET).contains(&submission.budget) {
        return Err(QuoteValidationError::BudgetOutOfRange);
    }

    if submission
        .deadline
        .is_some_and(|deadline| deadline < created_at.date_naive())
    {
        return Err(QuoteValidationError::DeadlineInPast);
    }

    let mut services = Vec::with_capacity(submission.services.len());
    for service in submission.services {
        if !services.contains(&service) {
            services.push(service);
        }
    }

    Ok(QuoteRequest {
        id,
        project_type: submission.project_type,
        budget: submission.budget,
        deadline: submission.deadline,
        services,
        description: submission.description.trim().to_string(),
        first_name,
        last_name,
        email,
        phone,
        company: submission
            .company
            .map(|company| company.trim().to_string())
            .filter(|company| !company.is_empty()),
        preferred_contact: submission.preferred_contact,
        status: QuoteStatus::Pending,
        created_at,
    })
}

fn required(field: &'static str, value: &str) -> Result<String, QuoteValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(QuoteValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::quotes::domain::{ContactPreference, IncludedService, ProjectType};
    use chrono::{NaiveDate, TimeZone};

    fn submission() -> QuoteSubmission {
        QuoteSubmission {
            project_type: ProjectType::Renovation,
            budget: 5_000.0,
            deadline: NaiveDate::from_ymd_opt(2025, 9, 1),
            services: vec![
                IncludedService::Demolition,
                IncludedService::Cleanup,
                IncludedService::Demolition,
            ],
            description: " Appartement T3 ".to_string(),
            first_name: "Hugo".to_string(),
            last_name: "Petit".to_string(),
            email: "hugo.petit@example.fr".to_string(),
            phone: "0611223344".to_string(),
            company: Some("   ".to_string()),
            preferred_contact: ContactPreference::Phone,
            gdpr_consent: true,
        }
    }

    fn build(submission: QuoteSubmission) -> Result<QuoteRequest, QuoteValidationError> {
        let created_at = Utc.with_ymd_and_hms(2025, 6, 15, 8, 30, 0).unwrap();
        quote_from_submission(submission, QuoteId("quote-test".to_string()), created_at)
    }

    #[test]
    fn accepted_form_is_pending_with_unique_services() {
        let quote = build(submission()).expect("valid form");
        assert_eq!(quote.status, QuoteStatus::Pending);
        assert_eq!(
            quote.services,
            vec![IncludedService::Demolition, IncludedService::Cleanup]
        );
        assert_eq!(quote.description, "Appartement T3");
        assert_eq!(quote.company, None);
    }

    #[test]
    fn consent_is_checked_before_anything_else() {
        let mut refused = submission();
        refused.gdpr_consent = false;
        refused.first_name = String::new();
        assert_eq!(build(refused), Err(QuoteValidationError::ConsentRequired));
    }

    #[test]
    fn budget_stays_within_the_slider_range() {
        for budget in [999.0, 100_001.0, f64::NAN] {
            let mut invalid = submission();
            invalid.budget = budget;
            assert_eq!(build(invalid), Err(QuoteValidationError::BudgetOutOfRange));
        }
        for budget in [MIN_BUDGET, MAX_BUDGET] {
            let mut edge = submission();
            edge.budget = budget;
            assert!(build(edge).is_ok());
        }
    }

    #[test]
    fn deadline_may_be_today_but_not_earlier() {
        let mut today = submission();
        today.deadline = NaiveDate::from_ymd_opt(2025, 6, 15);
        assert!(build(today).is_ok());

        let mut past = submission();
        past.deadline = NaiveDate::from_ymd_opt(2025, 6, 14);
        assert_eq!(build(past), Err(QuoteValidationError::DeadlineInPast));

        let mut open = submission();
        open.deadline = None;
        assert!(build(open).is_ok());
    }
}
