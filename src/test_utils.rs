use crate::models::domain::{Question, QuestionKind, TestDraft};

#[cfg(test)]
pub mod fixtures {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use crate::models::domain::{Difficulty, OptionList};
    use crate::repositories::InMemorySessionStore;
    use crate::services::{QuestionSetEditor, TestSubmissionService};

    pub const BASE_URL: &str = "http://localhost:3000";

    /// A draft that passes validation: one true/false and one multiple choice question.
    pub fn capitals_draft() -> TestDraft {
        let mut draft = TestDraft::new("Capitals", "European capitals");

        let mut true_false = Question::new(QuestionKind::TrueFalse);
        true_false.set_text("Berlin is the capital of Germany.");
        draft.questions.push(true_false);

        draft.questions.push(Question::MultipleChoice {
            text: "Which city is the capital of France?".to_string(),
            options: OptionList::from(vec!["Paris", "Berlin", "Rome", ""]),
            correct_answer: Some(0),
            difficulty: Difficulty::Medium,
        });

        draft
    }

    /// Blank editor wired to the given service and session store.
    pub fn editor_with<S>(service: S, store: InMemorySessionStore) -> QuestionSetEditor
    where
        S: TestSubmissionService + 'static,
    {
        QuestionSetEditor::new(
            Arc::new(service),
            Arc::new(store),
            BASE_URL,
            Duration::from_secs(5),
        )
    }

    /// Editor preloaded with [`capitals_draft`].
    pub fn complete_editor<S>(service: S, store: InMemorySessionStore) -> QuestionSetEditor
    where
        S: TestSubmissionService + 'static,
    {
        editor_with(service, store).with_draft(capitals_draft())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_capitals_draft() {
        let draft = capitals_draft();
        assert_eq!(draft.title, "Capitals");
        assert_eq!(draft.questions.len(), 2);
        assert!(draft.validate().is_ok());
    }
}
