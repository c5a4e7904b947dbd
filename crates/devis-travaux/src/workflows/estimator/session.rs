use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::Catalog;
use super::domain::{AnswerOption, Category, Question};
use super::error::EstimatorError;
use super::formula::FormulaTable;

/// Where a session stands in its category's question graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionState {
    Active {
        question_id: String,
    },
    AwaitingCustomInput {
        question_id: String,
        option_index: usize,
    },
    Final {
        total: f64,
    },
}

/// Value kept for one visited question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedAnswer {
    pub question_id: String,
    pub option_text: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_input: Option<f64>,
}

/// Caller-owned walk state. Every estimator operation returns a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationSession {
    pub category_id: String,
    pub state: SessionState,
    #[serde(default)]
    pub answers: Vec<RecordedAnswer>,
}

impl EstimationSession {
    pub fn total(&self) -> f64 {
        self.answers.iter().map(|answer| answer.value).sum()
    }

    pub fn current_question_id(&self) -> Option<&str> {
        match &self.state {
            SessionState::Active { question_id }
            | SessionState::AwaitingCustomInput { question_id, .. } => Some(question_id),
            SessionState::Final { .. } => None,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self.state, SessionState::Final { .. })
    }

    pub fn answer(&self, question_id: &str) -> Option<&RecordedAnswer> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
    }

    pub fn final_estimate(&self) -> Option<FinalEstimate> {
        match self.state {
            SessionState::Final { total } => Some(FinalEstimate {
                category_id: self.category_id.clone(),
                total,
                breakdown: self.answers.clone(),
            }),
            _ => None,
        }
    }

    /// Re-answering replaces the answer and drops the ones recorded after it.
    fn record(&mut self, answer: RecordedAnswer) {
        match self
            .answers
            .iter()
            .position(|existing| existing.question_id == answer.question_id)
        {
            Some(position) => {
                self.answers.truncate(position);
                self.answers.push(answer);
            }
            None => self.answers.push(answer),
        }
    }

    fn advance(&mut self, next_question: Option<&str>) {
        self.state = match next_question {
            Some(question_id) => SessionState::Active {
                question_id: question_id.to_string(),
            },
            None => SessionState::Final {
                total: self.total(),
            },
        };
    }
}

/// Completed walk as handed to lead intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalEstimate {
    pub category_id: String,
    pub total: f64,
    pub breakdown: Vec<RecordedAnswer>,
}

/// 1-based position of the current question and the category's question count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub position: usize,
    pub total_questions: usize,
}

/// Session plus what a client needs to render the next step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub session: EstimationSession,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_estimate: Option<FinalEstimate>,
}

/// Drives estimation sessions over a shared catalog.
#[derive(Debug, Clone)]
pub struct Estimator {
    catalog: Arc<Catalog>,
    formulas: FormulaTable,
}

impl Estimator {
    pub fn new(catalog: Arc<Catalog>, formulas: FormulaTable) -> Self {
        Self { catalog, formulas }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(Catalog::standard()), FormulaTable::standard())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn formulas(&self) -> &FormulaTable {
        &self.formulas
    }

    pub fn start_session(&self, category_id: &str) -> Result<EstimationSession, EstimatorError> {
        let category = self.category(category_id)?;
        let first = category
            .first_question()
            .ok_or_else(|| EstimatorError::UnknownCategory(category_id.to_string()))?;

        debug!(category = %category.id, "estimation session started");

        Ok(EstimationSession {
            category_id: category.id.clone(),
            state: SessionState::Active {
                question_id: first.id.clone(),
            },
            answers: Vec::new(),
        })
    }

    /// Choose an option of the current question by index.
    ///
    /// A custom option parks the session until `submit_custom_value`; any other option
    /// records its value and moves on. Choosing a regular option while a custom value is
    /// pending replaces the pending choice.
    pub fn select_option(
        &self,
        session: &EstimationSession,
        option_index: usize,
    ) -> Result<EstimationSession, EstimatorError> {
        let question_id = session
            .current_question_id()
            .ok_or(EstimatorError::SessionCompleted)?;
        let (category, question) = self.question(&session.category_id, question_id)?;
        self.verify_answers(category, session)?;
        let option = question
            .option(option_index)
            .ok_or_else(|| EstimatorError::InvalidOption {
                question_id: question.id.clone(),
                index: option_index,
            })?;

        let mut next = session.clone();
        if option.is_custom {
            next.state = SessionState::AwaitingCustomInput {
                question_id: question.id.clone(),
                option_index,
            };
            return Ok(next);
        }

        next.record(RecordedAnswer {
            question_id: question.id.clone(),
            option_text: option.text.clone(),
            value: option.value,
            custom_input: None,
        });
        next.advance(option.next_question.as_deref());
        self.log_completion(&next);
        Ok(next)
    }

    /// Resolve the pending custom option with a user-entered quantity.
    pub fn submit_custom_value(
        &self,
        session: &EstimationSession,
        raw_input: &str,
    ) -> Result<EstimationSession, EstimatorError> {
        let (question_id, option_index) = match &session.state {
            SessionState::AwaitingCustomInput {
                question_id,
                option_index,
            } => (question_id.as_str(), *option_index),
            SessionState::Active { .. } => return Err(EstimatorError::NotAwaitingCustomInput),
            SessionState::Final { .. } => return Err(EstimatorError::SessionCompleted),
        };

        let (category, question) = self.question(&session.category_id, question_id)?;
        self.verify_answers(category, session)?;
        let option = custom_option_at(question, option_index)?;
        let quantity = parse_quantity(raw_input)?;
        let value = self.formulas.resolve(&question.id, quantity);

        let mut next = session.clone();
        next.record(RecordedAnswer {
            question_id: question.id.clone(),
            option_text: option.text.clone(),
            value,
            custom_input: Some(quantity),
        });
        next.advance(option.next_question.as_deref());
        self.log_completion(&next);
        Ok(next)
    }

    /// `None` once the session is final.
    pub fn progress(
        &self,
        session: &EstimationSession,
    ) -> Result<Option<Progress>, EstimatorError> {
        let Some(question_id) = session.current_question_id() else {
            return Ok(None);
        };
        let (category, question) = self.question(&session.category_id, question_id)?;
        let position = category
            .position_of(&question.id)
            .ok_or_else(|| EstimatorError::UnknownQuestion {
                category_id: category.id.clone(),
                question_id: question.id.clone(),
            })?;

        Ok(Some(Progress {
            position,
            total_questions: category.questions.len(),
        }))
    }

    pub fn current_question(
        &self,
        session: &EstimationSession,
    ) -> Result<Option<&Question>, EstimatorError> {
        match session.current_question_id() {
            Some(question_id) => {
                let (_, question) = self.question(&session.category_id, question_id)?;
                Ok(Some(question))
            }
            None => Ok(None),
        }
    }

    pub fn view(&self, session: EstimationSession) -> Result<SessionView, EstimatorError> {
        let question = self.current_question(&session)?.cloned();
        let progress = self.progress(&session)?;
        let final_estimate = session.final_estimate();

        Ok(SessionView {
            session,
            question,
            progress,
            final_estimate,
        })
    }

    fn category(&self, category_id: &str) -> Result<&Category, EstimatorError> {
        self.catalog
            .category(category_id)
            .ok_or_else(|| EstimatorError::UnknownCategory(category_id.to_string()))
    }

    fn question(
        &self,
        category_id: &str,
        question_id: &str,
    ) -> Result<(&Category, &Question), EstimatorError> {
        let category = self.category(category_id)?;
        let question =
            category
                .question(question_id)
                .ok_or_else(|| EstimatorError::UnknownQuestion {
                    category_id: category.id.clone(),
                    question_id: question_id.to_string(),
                })?;
        Ok((category, question))
    }

    /// Replays client-held answers against the catalog. They must follow the question
    /// graph from the first question, each carrying the value its option or formula
    /// yields.
    fn verify_answers(
        &self,
        category: &Category,
        session: &EstimationSession,
    ) -> Result<(), EstimatorError> {
        let mut expected = category.first_question().map(|question| question.id.as_str());

        for answer in &session.answers {
            let tampered = || EstimatorError::TamperedSession(answer.question_id.clone());
            if expected != Some(answer.question_id.as_str()) {
                return Err(tampered());
            }
            let question = category.question(&answer.question_id).ok_or_else(tampered)?;
            let option = question
                .options
                .iter()
                .find(|option| self.records_option(question, option, answer))
                .ok_or_else(tampered)?;
            expected = option.next_question.as_deref();
        }

        // Either the next question on the path, or a rewind to one already answered.
        match session.current_question_id() {
            Some(current)
                if expected != Some(current) && session.answer(current).is_none() =>
            {
                Err(EstimatorError::TamperedSession(current.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn records_option(
        &self,
        question: &Question,
        option: &AnswerOption,
        answer: &RecordedAnswer,
    ) -> bool {
        if option.text != answer.option_text || option.is_custom != answer.custom_input.is_some()
        {
            return false;
        }

        let expected = match answer.custom_input {
            Some(quantity) if quantity.is_finite() => self.formulas.resolve(&question.id, quantity),
            Some(_) => return false,
            None => option.value,
        };
        same_amount(expected, answer.value)
    }

    fn log_completion(&self, session: &EstimationSession) {
        if let SessionState::Final { total } = session.state {
            info!(
                category = %session.category_id,
                answers = session.answers.len(),
                total,
                "estimation completed"
            );
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Tolerates last-bit drift from a JSON round trip.
fn same_amount(expected: f64, recorded: f64) -> bool {
    (expected - recorded).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn custom_option_at(question: &Question, index: usize) -> Result<&AnswerOption, EstimatorError> {
    question
        .option(index)
        .filter(|option| option.is_custom)
        .ok_or_else(|| EstimatorError::InvalidOption {
            question_id: question.id.clone(),
            index,
        })
}

/// Strict decimal parse: surrounding whitespace is ignored, nothing else is coerced.
pub fn parse_quantity(raw_input: &str) -> Result<f64, EstimatorError> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(EstimatorError::InvalidNumericInput(raw_input.to_string()));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EstimatorError::InvalidNumericInput(raw_input.to_string())),
    }
}
