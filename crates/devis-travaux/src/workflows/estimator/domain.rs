use serde::{Deserialize, Serialize};

/// One renovation project type and its branching questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Category {
    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    /// 1-based position of a question in the category's ordered list.
    pub fn position_of(&self, question_id: &str) -> Option<usize> {
        self.questions
            .iter()
            .position(|question| question.id == question_id)
            .map(|index| index + 1)
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id.clone(),
            title: self.title.clone(),
            question_count: self.questions.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    #[serde(default)]
    pub allows_custom_value: bool,
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    pub fn custom_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.is_custom)
    }

    /// A question ends the walk when at least one preset option has no successor.
    /// Custom options are left out: they only end a walk once a quantity is typed.
    pub fn is_terminal(&self) -> bool {
        self.options
            .iter()
            .any(|option| !option.is_custom && option.next_question.is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_question: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
}

impl AnswerOption {
    pub fn choice(text: &str, value: i32, next_question: &str) -> Self {
        Self {
            text: text.to_string(),
            value: f64::from(value),
            next_question: Some(next_question.to_string()),
            is_custom: false,
        }
    }

    pub fn last(text: &str, value: i32) -> Self {
        Self {
            text: text.to_string(),
            value: f64::from(value),
            next_question: None,
            is_custom: false,
        }
    }

    pub fn custom(text: &str, next_question: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            value: 0.0,
            next_question: next_question.map(str::to_string),
            is_custom: true,
        }
    }
}

/// Listing entry used by the category picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub title: String,
    pub question_count: usize,
}
