use std::future::Future;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::models::TagDraft;

/// Destination for submitted tag drafts.
pub trait TagSink {
    fn create_tag(&self, draft: &TagDraft) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Clone)]
pub struct TagsApiClient {
    http: Client,
    tags_url: String,
}

impl TagsApiClient {
    pub fn new(http: Client, config: &ApiConfig) -> Self {
        let tags_url = config.tags_url();

        info!(tags_url = %tags_url, "configured tags API client");

        Self { http, tags_url }
    }

    pub fn tags_url(&self) -> &str {
        &self.tags_url
    }
}

impl TagSink for TagsApiClient {
    async fn create_tag(&self, draft: &TagDraft) -> Result<()> {
        debug!(
            url = %self.tags_url,
            title = %draft.title(),
            slug = %draft.slug(),
            "sending create tag request"
        );

        let response = self
            .http
            .post(&self.tags_url)
            .json(draft)
            .send()
            .await
            .context("failed to contact the tags API")?
            .error_for_status()
            .context("tags API returned an error status")?;

        info!(
            status = response.status().as_u16(),
            slug = %draft.slug(),
            "tag created"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_to_tags_under_base_url() {
        let config = ApiConfig::new("http://tags.example.test/api/");
        let client = TagsApiClient::new(Client::new(), &config);

        assert_eq!(client.tags_url(), "http://tags.example.test/api/tags");
    }
}
