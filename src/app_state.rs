use std::sync::Arc;

use validator::Validate;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::TestDraft,
    repositories::{InMemorySessionStore, SessionStore},
    services::{HttpTestSubmissionService, PublishService, QuestionSetEditor, TestSubmissionService},
};

#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<dyn TestSubmissionService>,
    pub session_store: Arc<dyn SessionStore>,
    pub publish_service: Arc<PublishService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let submission_service = Arc::new(HttpTestSubmissionService::new(&config)?);
        log::info!(
            "Submitting tests to {} (timeout {}s)",
            submission_service.endpoint(),
            config.submission_timeout_secs
        );

        Ok(Self::with_services(
            config,
            submission_service,
            Arc::new(InMemorySessionStore::new()),
        ))
    }

    /// Wires the state around caller-provided backends.
    pub fn with_services(
        config: Config,
        submission_service: Arc<dyn TestSubmissionService>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        let publish_service = Arc::new(PublishService::new(
            session_store.clone(),
            config.app_base_url.clone(),
        ));

        Self {
            submission_service,
            session_store,
            publish_service,
            config: Arc::new(config),
        }
    }

    /// Starts a fresh authoring session.
    pub fn new_editor(&self) -> QuestionSetEditor {
        QuestionSetEditor::new(
            self.submission_service.clone(),
            self.session_store.clone(),
            self.config.app_base_url.clone(),
            self.config.submission_timeout(),
        )
    }

    pub fn editor_for(&self, draft: TestDraft) -> QuestionSetEditor {
        self.new_editor().with_draft(draft)
    }
}
