use crate::infra::{InMemoryDirectory, InMemoryLeadRepository, InMemoryNotifier};
use clap::Args;
use devis_travaux::config::{AppConfig, EstimatorConfig};
use devis_travaux::error::AppError;
use devis_travaux::workflows::directory::{BrokerQuery, DirectoryService};
use devis_travaux::workflows::estimator::{
    EstimationSession, Estimator, FormulaTable, SessionState,
};
use devis_travaux::workflows::leads::{
    LeadFilter, LeadService, LeadStatus, LeadSubmission, DEFAULT_NOTIFY_ADDRESS,
};
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Category id, e.g. `walls` or `energy-renovation`
    #[arg(long)]
    pub(crate) category: String,
    /// Option index to pick, once per question, in order
    #[arg(long)]
    pub(crate) answer: Vec<usize>,
    /// Quantity typed after an "other" option, consumed in order
    #[arg(long)]
    pub(crate) custom: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Category walked with first options (defaults to `walls`)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Département or region used for the professional search (defaults to `69`)
    #[arg(long)]
    pub(crate) department: Option<String>,
    /// Skip the lead intake portion of the demo.
    #[arg(long)]
    pub(crate) skip_lead: bool,
}

/// Same catalog source as the server: `ESTIMATOR_CATALOG_PATH` or the built-in one.
fn configured_estimator(config: &EstimatorConfig) -> Result<Estimator, AppError> {
    Ok(Estimator::new(
        Arc::new(config.catalog()?),
        FormulaTable::standard(),
    ))
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let estimator = configured_estimator(&config.estimator)?;
    let mut answers: VecDeque<usize> = args.answer.into();
    let mut customs: VecDeque<String> = args.custom.into();

    let mut session = estimator.start_session(&args.category)?;
    loop {
        let next = match &session.state {
            SessionState::Final { .. } => break,
            SessionState::AwaitingCustomInput { .. } => customs
                .pop_front()
                .map(|raw| estimator.submit_custom_value(&session, &raw)),
            SessionState::Active { .. } => answers
                .pop_front()
                .map(|index| estimator.select_option(&session, index)),
        };

        match next {
            Some(result) => session = result?,
            None => break,
        }
    }

    render_session(&estimator, &session)
}

fn render_session(estimator: &Estimator, session: &EstimationSession) -> Result<(), AppError> {
    println!("Estimate for '{}'", session.category_id);
    for answer in &session.answers {
        match answer.custom_input {
            Some(quantity) => println!(
                "  {:<24} {} ({}) -> {:.2} €",
                answer.question_id, answer.option_text, quantity, answer.value
            ),
            None => println!(
                "  {:<24} {} -> {:.2} €",
                answer.question_id, answer.option_text, answer.value
            ),
        }
    }

    if let Some(estimate) = session.final_estimate() {
        println!("Total: {:.2} €", estimate.total);
        return Ok(());
    }

    println!("Running total: {:.2} €", session.total());
    if let (Some(question), Some(progress)) = (
        estimator.current_question(session)?,
        estimator.progress(session)?,
    ) {
        let waiting = matches!(session.state, SessionState::AwaitingCustomInput { .. });
        println!(
            "Stopped at question {}/{}: {}",
            progress.position, progress.total_questions, question.prompt
        );
        if waiting {
            println!("  (awaiting a --custom quantity)");
        } else {
            for (index, option) in question.options.iter().enumerate() {
                println!("  [{index}] {} ({:.0} €)", option.text, option.value);
            }
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let category = args.category.unwrap_or_else(|| "walls".to_string());
    let department = args.department.unwrap_or_else(|| "69".to_string());

    let config = AppConfig::load()?;
    println!("Renovation estimate demo");
    let estimator = configured_estimator(&config.estimator)?;
    let mut session = estimator.start_session(&category)?;
    while !session.is_final() {
        session = match session.state {
            SessionState::AwaitingCustomInput { .. } => {
                estimator.submit_custom_value(&session, "10")?
            }
            _ => estimator.select_option(&session, 0)?,
        };
    }
    render_session(&estimator, &session)?;

    if !args.skip_lead {
        if let Some(estimate) = session.final_estimate() {
            demo_lead_intake(&estimate.category_id, estimate.total, &department);
        }
    }

    println!("\nProfessionals matching '{}'", department);
    let directory = DirectoryService::new(Arc::new(InMemoryDirectory::seeded()));
    match directory.find_professionals(&department) {
        Ok(professionals) if professionals.is_empty() => println!("  none"),
        Ok(professionals) => {
            for professional in professionals {
                println!(
                    "  {} ({}, {}) {} ans d'expérience, {}",
                    professional.name,
                    professional.department,
                    professional.region,
                    professional.experience,
                    professional.specialties.join(", ")
                );
            }
        }
        Err(err) => println!("  Directory unavailable: {}", err),
    }

    println!("\nBrokers, most experienced first");
    match directory.find_brokers(&BrokerQuery::default()) {
        Ok(page) => {
            for broker in &page.brokers {
                let city = broker
                    .address
                    .as_ref()
                    .map(|address| address.city.as_str())
                    .unwrap_or("-");
                println!(
                    "  {} {} ({}) {} ans",
                    broker.first_name, broker.last_name, city, broker.experience_years
                );
            }
            println!(
                "  page {}/{} ({} results)",
                page.page, page.total_pages, page.total_results
            );
        }
        Err(err) => println!("  Directory unavailable: {}", err),
    }

    Ok(())
}

fn demo_lead_intake(project_type: &str, estimated_budget: f64, department: &str) {
    println!("\nLead intake demo");
    let notifier = Arc::new(InMemoryNotifier::default());
    let service = LeadService::new(
        Arc::new(InMemoryLeadRepository::default()),
        notifier.clone(),
    );

    let submission = LeadSubmission {
        first_name: "Claire".to_string(),
        last_name: "Moreau".to_string(),
        email: "claire.moreau@example.fr".to_string(),
        phone: "0600000000".to_string(),
        postal_code: department.to_string(),
        project_type: project_type.to_string(),
        estimated_budget,
        message: Some("Disponible en semaine après 18h".to_string()),
        professional_name: None,
    };

    let lead = match service.submit(submission) {
        Ok(lead) => lead,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return;
        }
    };
    println!(
        "  Stored {} for {} ({} €, status: {})",
        lead.id.0,
        lead.full_name(),
        lead.estimated_budget,
        lead.status.label()
    );

    if let Err(err) = service.update_status(&lead.id, LeadStatus::Assigned) {
        println!("  Status update failed: {}", err);
    }

    match service.list(&LeadFilter::default()) {
        Ok(listing) => println!(
            "  Leads: {} total, {} pending, {} in progress, {} completed",
            listing.counts.total,
            listing.counts.pending,
            listing.counts.in_progress,
            listing.counts.completed
        ),
        Err(err) => println!("  Listing unavailable: {}", err),
    }

    for notification in notifier.outbox() {
        let recipient = if notification.to == DEFAULT_NOTIFY_ADDRESS {
            "default inbox"
        } else {
            notification.to.as_str()
        };
        println!("  Notification to {}: {}", recipient, notification.subject);
    }
}
