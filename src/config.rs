use std::env;

use tracing::info;

pub const BASE_URL_VAR: &str = "TAGS_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        info!(base_url = %base_url, "configured tags API");

        Self { base_url }
    }

    pub fn tags_url(&self) -> String {
        format!("{}/tags", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
