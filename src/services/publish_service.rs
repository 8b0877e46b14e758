use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::dto::PublishedTest,
    repositories::{SessionStore, TEST_ID_KEY},
};

/// Builds the shareable link for a submitted test: `<base_url>/test/<test_id>`.
pub fn build_test_link(base_url: &str, test_id: &str) -> String {
    format!("{}/test/{}", base_url.trim_end_matches('/'), test_id)
}

/// Read side of a submission: what the publish view shows after the editor navigates away.
pub struct PublishService {
    session_store: Arc<dyn SessionStore>,
    base_url: String,
}

impl PublishService {
    pub fn new(session_store: Arc<dyn SessionStore>, base_url: impl Into<String>) -> Self {
        Self {
            session_store,
            base_url: base_url.into(),
        }
    }

    pub async fn current(&self) -> AppResult<Option<PublishedTest>> {
        let published = self
            .session_store
            .get(TEST_ID_KEY)
            .await?
            .map(|test_id| PublishedTest {
                link: build_test_link(&self.base_url, &test_id),
                test_id,
            });

        Ok(published)
    }

    pub async fn clear(&self) -> AppResult<()> {
        if let Some(test_id) = self.session_store.remove(TEST_ID_KEY).await? {
            log::info!("Cleared published test {} from session", test_id);
        }
        Ok(())
    }
}
