use serde::Serialize;

use crate::models::domain::{Question, TestDraft};

/// Body posted to the submission backend.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitTestRequest<'a> {
    pub title: &'a str,
    pub introduction: &'a str,
    pub questions: &'a [Question],
}

impl<'a> SubmitTestRequest<'a> {
    pub fn new(title: &'a str, introduction: &'a str, questions: &'a [Question]) -> Self {
        SubmitTestRequest {
            title,
            introduction,
            questions,
        }
    }
}

impl<'a> From<&'a TestDraft> for SubmitTestRequest<'a> {
    fn from(draft: &'a TestDraft) -> Self {
        SubmitTestRequest::new(&draft.title, &draft.introduction, &draft.questions)
    }
}
