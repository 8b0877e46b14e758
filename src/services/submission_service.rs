use std::time::Duration;

use async_trait::async_trait;

use crate::{
    config::Config,
    errors::{AppResult, ServiceError},
    models::{
        domain::Question,
        dto::{SubmitTestRequest, SubmitTestResponse},
    },
};

/// Backend that stores a finished test and hands back its id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestSubmissionService: Send + Sync {
    async fn submit(
        &self,
        title: &str,
        introduction: &str,
        questions: &[Question],
    ) -> Result<SubmitTestResponse, ServiceError>;
}

pub struct HttpTestSubmissionService {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpTestSubmissionService {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.submission_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.submission_url(),
            timeout: config.submission_timeout(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_error(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout(self.timeout)
        } else {
            ServiceError::Request {
                endpoint: self.endpoint.clone(),
                message: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl TestSubmissionService for HttpTestSubmissionService {
    async fn submit(
        &self,
        title: &str,
        introduction: &str,
        questions: &[Question],
    ) -> Result<SubmitTestResponse, ServiceError> {
        let body = SubmitTestRequest::new(title, introduction, questions);
        log::debug!(
            "POST {} with {} question(s)",
            self.endpoint,
            body.questions.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| self.request_error(e))?;

        if !status.is_success() {
            log::error!("Submission backend error: {} - {}", status, response_text);
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let parsed: SubmitTestResponse = serde_json::from_str(&response_text)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

        if parsed.test_id.trim().is_empty() {
            return Err(ServiceError::MalformedResponse(
                "test_id is empty".to_string(),
            ));
        }

        log::info!("Submission backend accepted test {}", parsed.test_id);
        Ok(parsed)
    }
}
