use std::env;
use std::time::Duration;

use validator::Validate;

#[derive(Clone, Debug, Validate)]
pub struct Config {
    /// Prefix of shareable test links.
    #[validate(url)]
    pub app_base_url: String,
    #[validate(url)]
    pub submission_api_url: String,
    #[validate(length(min = 1))]
    pub submission_endpoint: String,
    #[validate(range(min = 1, max = 600))]
    pub submission_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_base_url: env::var("APP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            submission_api_url: env::var("SUBMISSION_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            submission_endpoint: env::var("SUBMISSION_ENDPOINT")
                .unwrap_or_else(|_| "/api/tests".to_string()),
            submission_timeout_secs: env::var("SUBMISSION_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    pub fn submission_url(&self) -> String {
        let endpoint = self.submission_endpoint.trim_start_matches('/');
        format!(
            "{}/{}",
            self.submission_api_url.trim_end_matches('/'),
            endpoint
        )
    }

    pub fn submission_timeout(&self) -> Duration {
        Duration::from_secs(self.submission_timeout_secs)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_base_url: "http://localhost:3000".to_string(),
            submission_api_url: "http://127.0.0.1:8080".to_string(),
            submission_endpoint: "/api/tests".to_string(),
            submission_timeout_secs: 5,
        }
    }
}
