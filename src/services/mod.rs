pub mod publish_service;
pub mod question_set_editor;
pub mod submission_service;

pub use publish_service::{build_test_link, PublishService};
pub use question_set_editor::{EditorState, QuestionSetEditor, SubmitOutcome, View};
pub use submission_service::{HttpTestSubmissionService, TestSubmissionService};
