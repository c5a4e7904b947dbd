/// Failures raised while walking an estimation session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimatorError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("question '{question_id}' does not exist in category '{category_id}'")]
    UnknownQuestion {
        category_id: String,
        question_id: String,
    },
    #[error("option {index} is not available for question '{question_id}'")]
    InvalidOption { question_id: String, index: usize },
    #[error("'{0}' is not a valid number")]
    InvalidNumericInput(String),
    #[error("session is not waiting for a custom value")]
    NotAwaitingCustomInput,
    #[error("session already produced a final estimate")]
    SessionCompleted,
    #[error("session does not match the catalog at question '{0}'")]
    TamperedSession(String),
}

/// Structural problems detected while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no categories")]
    NoCategories,
    #[error("category '{0}' has no questions")]
    EmptyCategory(String),
    #[error("category '{0}' is declared more than once")]
    DuplicateCategory(String),
    #[error("question '{question_id}' is declared more than once in '{category_id}'")]
    DuplicateQuestion {
        category_id: String,
        question_id: String,
    },
    #[error("question '{question_id}' in '{category_id}' has no options")]
    QuestionWithoutOptions {
        category_id: String,
        question_id: String,
    },
    #[error("'{category_id}/{question_id}' points to missing question '{target}'")]
    DanglingReference {
        category_id: String,
        question_id: String,
        target: String,
    },
    #[error("category '{category_id}' loops back through question '{question_id}'")]
    Cycle {
        category_id: String,
        question_id: String,
    },
    #[error("category '{0}' never reaches a final question")]
    NoReachableTerminal(String),
    #[error("unable to read catalog file: {0}")]
    Io(String),
    #[error("catalog file is not valid JSON: {0}")]
    Parse(String),
}
