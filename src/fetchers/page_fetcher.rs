use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};

use crate::config::settings::ScraperSettings;
use crate::errors::fetch_context;

/// HTTP client for the profile and standings pages.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// The optional cookie header rides along on every request; the source
    /// site serves standings pages only to logged-in sessions.
    pub fn new(settings: &ScraperSettings, cookie: Option<&str>) -> Result<Self> {
        let client = Self::build_client(settings, cookie)?;
        Ok(Self { client })
    }

    /// Fetch one page as text. A non-success status is an error here, and
    /// the caller treats any failure as terminal for the whole invocation.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| fetch_context(url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {} for {}", response.status(), url);
        }

        response.text().await.context("Failed to read response body")
    }

    fn build_client(settings: &ScraperSettings, cookie: Option<&str>) -> Result<Client> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = cookie {
            let value = HeaderValue::from_str(cookie).context("Invalid cookie header value")?;
            headers.insert(COOKIE, value);
        }

        Client::builder()
            .user_agent(settings.user_agent)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")
    }
}
