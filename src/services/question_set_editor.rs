use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{EditorError, EditorResult, ServiceError},
    models::domain::{Difficulty, Question, QuestionKind, TestDraft},
    repositories::{SessionStore, TEST_ID_KEY},
    services::{publish_service::build_test_link, submission_service::TestSubmissionService},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorState {
    Editing,
    Submitted { test_id: String, link: String },
}

/// Where the caller should go next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Publish,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub test_id: String,
    pub link: String,
    pub navigate_to: View,
    pub submitted_at: DateTime<Utc>,
}

/// In-memory authoring session for one test.
///
/// Edits are synchronous and take `&mut self`; an out-of-range index or an edit aimed at
/// the wrong question kind is rejected without touching the draft. `submit` is the only
/// suspending call, and once it succeeds the editor is closed for further changes.
pub struct QuestionSetEditor {
    session_id: Uuid,
    draft: TestDraft,
    state: EditorState,
    submission_service: Arc<dyn TestSubmissionService>,
    session_store: Arc<dyn SessionStore>,
    base_url: String,
    submission_timeout: Duration,
}

impl QuestionSetEditor {
    pub fn new(
        submission_service: Arc<dyn TestSubmissionService>,
        session_store: Arc<dyn SessionStore>,
        base_url: impl Into<String>,
        submission_timeout: Duration,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            draft: TestDraft::default(),
            state: EditorState::Editing,
            submission_service,
            session_store,
            base_url: base_url.into(),
            submission_timeout,
        }
    }

    /// Starts the session from existing content instead of a blank draft.
    pub fn with_draft(mut self, draft: TestDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn draft(&self) -> &TestDraft {
        &self.draft
    }

    pub fn questions(&self) -> &[Question] {
        &self.draft.questions
    }

    pub fn question(&self, index: usize) -> EditorResult<&Question> {
        let len = self.draft.questions.len();
        self.draft
            .questions
            .get(index)
            .ok_or(EditorError::QuestionNotFound { index, len })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn link(&self) -> Option<&str> {
        match &self.state {
            EditorState::Submitted { link, .. } => Some(link),
            EditorState::Editing => None,
        }
    }

    pub fn set_title(&mut self, text: impl Into<String>) -> EditorResult<()> {
        self.ensure_editing()?;
        self.draft.title = text.into();
        Ok(())
    }

    pub fn set_introduction(&mut self, text: impl Into<String>) -> EditorResult<()> {
        self.ensure_editing()?;
        self.draft.introduction = text.into();
        Ok(())
    }

    /// Appends a question with default fields and returns its index.
    pub fn add_question(&mut self, kind: QuestionKind) -> EditorResult<usize> {
        self.ensure_editing()?;
        self.draft.questions.push(Question::new(kind));
        let index = self.draft.questions.len() - 1;
        log::debug!("Editor {} added {} question at {}", self.session_id, kind, index);
        Ok(index)
    }

    pub fn add_true_false_question(&mut self) -> EditorResult<usize> {
        self.add_question(QuestionKind::TrueFalse)
    }

    pub fn add_multiple_choice_question(&mut self) -> EditorResult<usize> {
        self.add_question(QuestionKind::MultipleChoice)
    }

    pub fn add_fill_in_the_blank_question(&mut self) -> EditorResult<usize> {
        self.add_question(QuestionKind::FillInTheBlank)
    }

    pub fn add_multiple_response_question(&mut self) -> EditorResult<usize> {
        self.add_question(QuestionKind::MultipleResponse)
    }

    pub fn set_difficulty(&mut self, index: usize, level: Difficulty) -> EditorResult<()> {
        self.question_mut(index)?.set_difficulty(level);
        Ok(())
    }

    pub fn set_question_text(&mut self, index: usize, text: impl Into<String>) -> EditorResult<()> {
        self.question_mut(index)?.set_text(text);
        Ok(())
    }

    /// Writes an option and applies the blank-slot rule: a cleared option is dropped, and
    /// filling the last slot opens a new blank one.
    pub fn edit_option(
        &mut self,
        q_index: usize,
        option_index: usize,
        value: impl Into<String>,
    ) -> EditorResult<()> {
        let question =
            self.option_question_mut(q_index, option_index, QuestionKind::MultipleChoice)?;
        let len = question.options().map_or(0, |options| options.len());
        if question.edit_option(option_index, value) {
            Ok(())
        } else {
            Err(EditorError::OptionNotFound {
                question: q_index,
                index: option_index,
                len,
            })
        }
    }

    /// Explicit delete of one option, returning its text. The blank-slot rule is not
    /// re-applied.
    pub fn remove_option(&mut self, q_index: usize, option_index: usize) -> EditorResult<String> {
        let question =
            self.option_question_mut(q_index, option_index, QuestionKind::MultipleChoice)?;
        let len = question.options().map_or(0, |options| options.len());
        question
            .remove_option(option_index)
            .ok_or(EditorError::OptionNotFound {
                question: q_index,
                index: option_index,
                len,
            })
    }

    pub fn set_correct_answer(&mut self, q_index: usize, option_index: usize) -> EditorResult<()> {
        let question =
            self.option_question_mut(q_index, option_index, QuestionKind::MultipleChoice)?;
        match question {
            Question::MultipleChoice { correct_answer, .. } => {
                *correct_answer = Some(option_index);
                Ok(())
            }
            other => Err(EditorError::WrongQuestionKind {
                index: q_index,
                expected: QuestionKind::MultipleChoice,
                actual: other.kind(),
            }),
        }
    }

    /// Flips whether an option is one of the correct responses.
    pub fn toggle_correct_response(
        &mut self,
        q_index: usize,
        option_index: usize,
    ) -> EditorResult<bool> {
        let question =
            self.option_question_mut(q_index, option_index, QuestionKind::MultipleResponse)?;
        match question {
            Question::MultipleResponse {
                correct_answers, ..
            } => {
                if correct_answers.remove(&option_index) {
                    Ok(false)
                } else {
                    correct_answers.insert(option_index);
                    Ok(true)
                }
            }
            other => Err(EditorError::WrongQuestionKind {
                index: q_index,
                expected: QuestionKind::MultipleResponse,
                actual: other.kind(),
            }),
        }
    }

    pub fn set_true_false_answer(&mut self, q_index: usize, answer: bool) -> EditorResult<()> {
        match self.question_mut(q_index)? {
            Question::TrueFalse { correct_answer, .. } => {
                *correct_answer = Some(answer);
                Ok(())
            }
            other => Err(EditorError::WrongQuestionKind {
                index: q_index,
                expected: QuestionKind::TrueFalse,
                actual: other.kind(),
            }),
        }
    }

    pub fn set_fill_in_blank_answer(
        &mut self,
        q_index: usize,
        text: impl Into<String>,
    ) -> EditorResult<()> {
        match self.question_mut(q_index)? {
            Question::FillInTheBlank { correct_answer, .. } => {
                *correct_answer = text.into();
                Ok(())
            }
            other => Err(EditorError::WrongQuestionKind {
                index: q_index,
                expected: QuestionKind::FillInTheBlank,
                actual: other.kind(),
            }),
        }
    }

    /// Removes a question; later questions move down one index.
    pub fn remove_question(&mut self, index: usize) -> EditorResult<Question> {
        self.question_mut(index)?;
        let removed = self.draft.questions.remove(index);
        log::debug!(
            "Editor {} removed {} question at {}",
            self.session_id,
            removed.kind(),
            index
        );
        Ok(removed)
    }

    /// Validates the draft, sends it to the submission service and records the new test
    /// id in the session.
    ///
    /// A failed call is logged and returned; the draft stays editable so the caller can
    /// retry by hand.
    pub async fn submit(&mut self) -> EditorResult<SubmitOutcome> {
        self.ensure_editing()?;

        if let Err(errors) = self.draft.validate() {
            log::warn!(
                "Editor {} submission blocked by incomplete draft: {}",
                self.session_id,
                errors
            );
            return Err(errors.into());
        }

        log::info!(
            "Editor {} submitting '{}' with {} question(s)",
            self.session_id,
            self.draft.title,
            self.draft.questions.len()
        );

        let call = self.submission_service.submit(
            &self.draft.title,
            &self.draft.introduction,
            &self.draft.questions,
        );
        let result = match tokio::time::timeout(self.submission_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout(self.submission_timeout)),
        };

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                log::error!("Editor {} submission failed: {}", self.session_id, err);
                return Err(EditorError::SubmissionFailed(err));
            }
        };

        let link = build_test_link(&self.base_url, &response.test_id);
        if let Err(err) = self.session_store.set(TEST_ID_KEY, &response.test_id).await {
            log::warn!(
                "Editor {} could not store test id {} in session: {}",
                self.session_id,
                response.test_id,
                err
            );
        }

        log::info!("Editor {} published test at {}", self.session_id, link);
        self.state = EditorState::Submitted {
            test_id: response.test_id.clone(),
            link: link.clone(),
        };

        Ok(SubmitOutcome {
            test_id: response.test_id,
            link,
            navigate_to: View::Publish,
            submitted_at: Utc::now(),
        })
    }

    fn ensure_editing(&self) -> EditorResult<()> {
        match self.state {
            EditorState::Editing => Ok(()),
            EditorState::Submitted { .. } => Err(EditorError::AlreadySubmitted),
        }
    }

    fn question_mut(&mut self, index: usize) -> EditorResult<&mut Question> {
        self.ensure_editing()?;
        let len = self.draft.questions.len();
        self.draft
            .questions
            .get_mut(index)
            .ok_or(EditorError::QuestionNotFound { index, len })
    }

    /// Looks up a choice-type question and checks that `option_index` exists on it.
    /// `expected` is the kind reported when the question has no options.
    fn option_question_mut(
        &mut self,
        q_index: usize,
        option_index: usize,
        expected: QuestionKind,
    ) -> EditorResult<&mut Question> {
        let question = self.question_mut(q_index)?;
        let Some(options) = question.options() else {
            return Err(EditorError::WrongQuestionKind {
                index: q_index,
                expected,
                actual: question.kind(),
            });
        };
        if option_index >= options.len() {
            return Err(EditorError::OptionNotFound {
                question: q_index,
                index: option_index,
                len: options.len(),
            });
        }
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dto::SubmitTestResponse;
    use crate::errors::AppError;
    use crate::repositories::{InMemorySessionStore, MockSessionStore};
    use crate::services::submission_service::MockTestSubmissionService;
    use crate::test_utils::fixtures::{complete_editor, editor_with, BASE_URL};

    fn offline_editor() -> QuestionSetEditor {
        editor_with(MockTestSubmissionService::new(), InMemorySessionStore::new())
    }

    fn options_of(editor: &QuestionSetEditor, index: usize) -> Vec<String> {
        editor
            .question(index)
            .unwrap()
            .options()
            .expect("question has options")
            .as_slice()
            .to_vec()
    }

    #[test]
    fn add_question_appends_in_call_order() {
        let mut editor = offline_editor();
        let kinds = [
            QuestionKind::MultipleChoice,
            QuestionKind::TrueFalse,
            QuestionKind::FillInTheBlank,
            QuestionKind::MultipleResponse,
            QuestionKind::TrueFalse,
        ];

        for (expected_index, kind) in kinds.iter().enumerate() {
            assert_eq!(editor.add_question(*kind).unwrap(), expected_index);
        }

        assert_eq!(editor.questions().len(), kinds.len());
        let added: Vec<QuestionKind> = editor.questions().iter().map(Question::kind).collect();
        assert_eq!(added, kinds);
        assert!(editor
            .questions()
            .iter()
            .all(|q| q.difficulty() == Difficulty::Easy));
    }

    #[test]
    fn multiple_choice_option_scenario() {
        let mut editor = offline_editor();
        editor.add_multiple_choice_question().unwrap();
        assert_eq!(options_of(&editor, 0), vec!["", "", "", ""]);

        editor.edit_option(0, 0, "Paris").unwrap();
        assert_eq!(options_of(&editor, 0), vec!["Paris", "", "", ""]);

        editor.edit_option(0, 1, "Berlin").unwrap();
        assert_eq!(options_of(&editor, 0), vec!["Paris", "Berlin", "", ""]);
    }

    #[test]
    fn filling_last_option_opens_one_blank_slot() {
        let mut editor = offline_editor();
        editor.add_multiple_response_question().unwrap();

        for (index, city) in ["Paris", "Berlin", "Rome", "Madrid", "Lisbon"]
            .iter()
            .enumerate()
        {
            editor.edit_option(0, index, *city).unwrap();
        }

        assert_eq!(
            options_of(&editor, 0),
            vec!["Paris", "Berlin", "Rome", "Madrid", "Lisbon", ""]
        );
    }

    #[test]
    fn clearing_an_option_through_edit_removes_it() {
        let mut editor = offline_editor();
        editor.add_multiple_choice_question().unwrap();
        editor.edit_option(0, 0, "Paris").unwrap();
        editor.edit_option(0, 1, "Berlin").unwrap();
        editor.set_correct_answer(0, 1).unwrap();

        editor.edit_option(0, 0, "").unwrap();

        assert_eq!(options_of(&editor, 0), vec!["Berlin", "", ""]);
        assert!(matches!(
            editor.question(0).unwrap(),
            Question::MultipleChoice {
                correct_answer: Some(0),
                ..
            }
        ));
    }

    #[test]
    fn remove_option_nulls_matching_correct_answer() {
        let mut editor = offline_editor();
        editor.add_multiple_choice_question().unwrap();
        editor.edit_option(0, 0, "Paris").unwrap();
        editor.set_correct_answer(0, 0).unwrap();

        assert_eq!(editor.remove_option(0, 0).unwrap(), "Paris");

        assert_eq!(options_of(&editor, 0), vec!["", "", ""]);
        assert!(matches!(
            editor.question(0).unwrap(),
            Question::MultipleChoice {
                correct_answer: None,
                ..
            }
        ));
    }

    #[test]
    fn remove_option_does_not_restore_blank_slot() {
        let mut editor = offline_editor();
        editor.add_multiple_choice_question().unwrap();
        for index in 0..4 {
            editor.edit_option(0, index, format!("City {}", index)).unwrap();
        }
        assert_eq!(options_of(&editor, 0).len(), 5);

        assert_eq!(editor.remove_option(0, 4).unwrap(), "");

        assert_eq!(
            options_of(&editor, 0),
            vec!["City 0", "City 1", "City 2", "City 3"]
        );
    }

    #[test]
    fn true_false_answer_scenario() {
        let mut editor = offline_editor();
        editor.add_true_false_question().unwrap();
        assert!(matches!(
            editor.question(0).unwrap(),
            Question::TrueFalse {
                correct_answer: None,
                ..
            }
        ));

        editor.set_true_false_answer(0, true).unwrap();
        assert!(matches!(
            editor.question(0).unwrap(),
            Question::TrueFalse {
                correct_answer: Some(true),
                ..
            }
        ));
    }

    #[test]
    fn toggle_correct_response_adds_and_removes() {
        let mut editor = offline_editor();
        editor.add_multiple_response_question().unwrap();

        assert!(editor.toggle_correct_response(0, 1).unwrap());
        assert!(editor.toggle_correct_response(0, 2).unwrap());
        assert!(!editor.toggle_correct_response(0, 1).unwrap());

        match editor.question(0).unwrap() {
            Question::MultipleResponse {
                correct_answers, ..
            } => assert_eq!(correct_answers.iter().copied().collect::<Vec<_>>(), vec![2]),
            other => panic!("unexpected question {:?}", other),
        }
    }

    #[test]
    fn answers_are_checked_against_question_kind() {
        let mut editor = offline_editor();
        editor.add_true_false_question().unwrap();
        editor.add_multiple_response_question().unwrap();

        assert_eq!(
            editor.set_fill_in_blank_answer(0, "Paris"),
            Err(EditorError::WrongQuestionKind {
                index: 0,
                expected: QuestionKind::FillInTheBlank,
                actual: QuestionKind::TrueFalse,
            })
        );
        assert!(matches!(
            editor.edit_option(0, 0, "Paris"),
            Err(EditorError::WrongQuestionKind { index: 0, .. })
        ));
        assert_eq!(
            editor.set_correct_answer(1, 0),
            Err(EditorError::WrongQuestionKind {
                index: 1,
                expected: QuestionKind::MultipleChoice,
                actual: QuestionKind::MultipleResponse,
            })
        );
    }

    #[test]
    fn toggle_on_true_false_reports_multiple_response_expected() {
        let mut editor = offline_editor();
        editor.add_true_false_question().unwrap();

        assert_eq!(
            editor.toggle_correct_response(0, 0),
            Err(EditorError::WrongQuestionKind {
                index: 0,
                expected: QuestionKind::MultipleResponse,
                actual: QuestionKind::TrueFalse,
            })
        );
        assert_eq!(
            editor.remove_option(0, 0),
            Err(EditorError::WrongQuestionKind {
                index: 0,
                expected: QuestionKind::MultipleChoice,
                actual: QuestionKind::TrueFalse,
            })
        );
    }

    #[test]
    fn out_of_range_indices_leave_draft_untouched() {
        let mut editor = offline_editor();
        editor.add_multiple_choice_question().unwrap();
        let before = editor.draft().clone();

        assert_eq!(
            editor.set_difficulty(3, Difficulty::Hard),
            Err(EditorError::QuestionNotFound { index: 3, len: 1 })
        );
        assert_eq!(
            editor.edit_option(0, 4, "Paris"),
            Err(EditorError::OptionNotFound {
                question: 0,
                index: 4,
                len: 4,
            })
        );
        assert!(editor.set_correct_answer(0, 9).is_err());
        assert!(editor.remove_question(1).is_err());

        assert_eq!(editor.draft(), &before);
    }

    #[test]
    fn remove_question_shifts_later_indices() {
        let mut editor = offline_editor();
        editor.add_true_false_question().unwrap();
        editor.add_multiple_choice_question().unwrap();
        editor.add_fill_in_the_blank_question().unwrap();
        editor.set_question_text(2, "____ is the capital of Spain.").unwrap();

        let removed = editor.remove_question(1).unwrap();
        assert_eq!(removed.kind(), QuestionKind::MultipleChoice);

        assert_eq!(editor.questions().len(), 2);
        assert_eq!(editor.question(1).unwrap().kind(), QuestionKind::FillInTheBlank);
        editor.set_fill_in_blank_answer(1, "Madrid").unwrap();
        editor.set_difficulty(1, Difficulty::Medium).unwrap();

        let question = editor.question(1).unwrap();
        assert_eq!(question.text(), "____ is the capital of Spain.");
        assert_eq!(question.difficulty(), Difficulty::Medium);
    }

    #[actix_rt::test]
    async fn submit_with_empty_title_never_calls_service() {
        let mut service = MockTestSubmissionService::new();
        service.expect_submit().never();
        let mut editor = editor_with(service, InMemorySessionStore::new());
        editor.set_introduction("European capitals").unwrap();
        editor.add_true_false_question().unwrap();

        let result = editor.submit().await;

        assert!(matches!(result, Err(EditorError::Validation(_))));
        assert_eq!(editor.state(), &EditorState::Editing);
    }

    #[actix_rt::test]
    async fn submit_with_unanswered_blank_never_calls_service() {
        let mut service = MockTestSubmissionService::new();
        service.expect_submit().never();
        let mut editor = editor_with(service, InMemorySessionStore::new());
        editor.set_title("Capitals").unwrap();
        editor.set_introduction("European capitals").unwrap();
        editor.add_fill_in_the_blank_question().unwrap();

        let result = editor.submit().await;
        assert!(matches!(result, Err(EditorError::Validation(_))));
    }

    #[actix_rt::test]
    async fn submit_sends_current_draft_and_stores_test_id() {
        let mut service = MockTestSubmissionService::new();
        service
            .expect_submit()
            .withf(|title, introduction, questions| {
                title == "Capitals (final)"
                    && introduction == "European capitals"
                    && questions.len() == 2
                    && questions[1].text() == "Which city is the capital of France?"
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(SubmitTestResponse {
                    test_id: "abc123".to_string(),
                })
            });
        let store = InMemorySessionStore::new();
        let mut editor = complete_editor(service, store.clone());
        editor.set_title("Capitals (final)").unwrap();

        let outcome = editor.submit().await.expect("submission should succeed");

        assert_eq!(outcome.test_id, "abc123");
        assert_eq!(outcome.link, format!("{}/test/abc123", BASE_URL));
        assert_eq!(outcome.navigate_to, View::Publish);
        assert_eq!(editor.link(), Some(outcome.link.as_str()));
        assert_eq!(store.get(TEST_ID_KEY).await.unwrap(), Some("abc123".to_string()));
    }

    #[actix_rt::test]
    async fn failed_submit_keeps_draft_for_retry() {
        let mut service = MockTestSubmissionService::new();
        let mut seq = mockall::Sequence::new();
        service
            .expect_submit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                Err(ServiceError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                })
            });
        service
            .expect_submit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                Ok(SubmitTestResponse {
                    test_id: "retry-1".to_string(),
                })
            });
        let store = InMemorySessionStore::new();
        let mut editor = complete_editor(service, store.clone());
        let before = editor.draft().clone();

        let first = editor.submit().await;
        assert!(matches!(
            first,
            Err(EditorError::SubmissionFailed(ServiceError::Status { status: 503, .. }))
        ));
        assert_eq!(editor.state(), &EditorState::Editing);
        assert_eq!(editor.draft(), &before);
        assert_eq!(store.get(TEST_ID_KEY).await.unwrap(), None);

        let second = editor.submit().await.expect("retry should succeed");
        assert_eq!(second.test_id, "retry-1");
    }

    #[actix_rt::test]
    async fn submitted_editor_rejects_further_changes() {
        let mut service = MockTestSubmissionService::new();
        service.expect_submit().times(1).returning(|_, _, _| {
            Ok(SubmitTestResponse {
                test_id: "done".to_string(),
            })
        });
        let mut editor = complete_editor(service, InMemorySessionStore::new());
        editor.submit().await.unwrap();

        assert_eq!(editor.set_title("Changed"), Err(EditorError::AlreadySubmitted));
        assert_eq!(editor.add_true_false_question(), Err(EditorError::AlreadySubmitted));
        assert_eq!(editor.remove_question(0), Err(EditorError::AlreadySubmitted));
        assert!(matches!(
            editor.submit().await,
            Err(EditorError::AlreadySubmitted)
        ));
    }

    #[actix_rt::test]
    async fn slow_service_times_out() {
        struct SlowService;

        #[async_trait::async_trait]
        impl TestSubmissionService for SlowService {
            async fn submit(
                &self,
                _title: &str,
                _introduction: &str,
                _questions: &[Question],
            ) -> Result<SubmitTestResponse, ServiceError> {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(SubmitTestResponse {
                    test_id: "late".to_string(),
                })
            }
        }

        let mut editor = QuestionSetEditor::new(
            Arc::new(SlowService),
            Arc::new(InMemorySessionStore::new()),
            BASE_URL,
            Duration::from_millis(50),
        )
        .with_draft(crate::test_utils::fixtures::capitals_draft());

        let result = editor.submit().await;
        assert_eq!(
            result,
            Err(EditorError::SubmissionFailed(ServiceError::Timeout(
                Duration::from_millis(50)
            )))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Submission failed: Submission timed out after 50ms"
        );
        assert_eq!(editor.state(), &EditorState::Editing);
    }

    #[actix_rt::test]
    async fn session_write_failure_keeps_submission() {
        let mut service = MockTestSubmissionService::new();
        service.expect_submit().times(1).returning(|_, _, _| {
            Ok(SubmitTestResponse {
                test_id: "id1".to_string(),
            })
        });
        let mut store = MockSessionStore::new();
        store
            .expect_set()
            .withf(|key, value| key == TEST_ID_KEY && value == "id1")
            .times(1)
            .returning(|_, _| Err(AppError::SessionError("storage quota exceeded".to_string())));

        let mut editor = QuestionSetEditor::new(
            Arc::new(service),
            Arc::new(store),
            BASE_URL,
            Duration::from_secs(5),
        )
        .with_draft(crate::test_utils::fixtures::capitals_draft());

        let outcome = editor.submit().await.expect("submission should still succeed");

        assert_eq!(outcome.link, format!("{}/test/id1", BASE_URL));
        assert_eq!(
            editor.state(),
            &EditorState::Submitted {
                test_id: "id1".to_string(),
                link: outcome.link.clone(),
            }
        );
        assert_eq!(editor.set_title("Changed"), Err(EditorError::AlreadySubmitted));
    }
}
