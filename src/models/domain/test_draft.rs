use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::question::Question;

/// Unsaved test content owned by one editing session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct TestDraft {
    #[validate(length(min = 1, message = "Test title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Test introduction is required"))]
    pub introduction: String,

    #[serde(default)]
    #[validate(custom(function = "validate_questions"))]
    pub questions: Vec<Question>,
}

impl TestDraft {
    pub fn new(title: &str, introduction: &str) -> Self {
        TestDraft {
            title: title.to_string(),
            introduction: introduction.to_string(),
            questions: Vec::new(),
        }
    }
}

/// Fill-in-the-blank questions cannot be submitted without an answer.
fn validate_questions(questions: &[Question]) -> Result<(), ValidationError> {
    let missing: Vec<String> = questions
        .iter()
        .enumerate()
        .filter(|(_, question)| {
            matches!(question, Question::FillInTheBlank { correct_answer, .. } if correct_answer.is_empty())
        })
        .map(|(index, _)| (index + 1).to_string())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let mut error = ValidationError::new("answer_required");
    error.message = Some(Cow::Owned(format!(
        "Fill-in-the-blank answer is required for question(s) {}",
        missing.join(", ")
    )));
    Err(error)
}
