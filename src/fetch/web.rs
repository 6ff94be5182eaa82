use crate::config::{AnalyzerConfig, FetchMode};
use crate::error::FetchError;
use crate::fetch::{Fetcher, looks_like_html};
use reqwest::Client;
use std::time::Duration;
use url::Url;
use url::form_urlencoded::byte_serialize;

/// Placeholder in relay templates for the encoded target URL
const URL_PLACEHOLDER: &str = "{url}";

/// HTTP fetcher that either requests pages directly or walks a relay chain
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
    mode: FetchMode,
    relay_endpoints: Vec<String>,
}

impl WebFetcher {
    /// Builds the HTTP client from the configuration
    pub fn new(config: &AnalyzerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            mode: config.fetch_mode,
            relay_endpoints: config.relay_endpoints.clone(),
        })
    }

    /// GETs `url` and returns the body of a 2xx response
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            ::log::warn!("Request to {} returned {}", url, status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response.text().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })
    }

    async fn fetch_direct(&self, url: &Url) -> Result<String, FetchError> {
        ::log::info!("Fetching {}", url);
        let body = self.get_text(url.as_str()).await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Tries each relay in order, returning the first body that looks like HTML
    async fn fetch_via_relays(&self, url: &Url) -> Result<String, FetchError> {
        let mut last = String::from("no relay endpoints configured");

        for (attempt, template) in self.relay_endpoints.iter().enumerate() {
            let relay_url = relay_url(template, url);
            ::log::info!(
                "Relay attempt {}/{}: {}",
                attempt + 1,
                self.relay_endpoints.len(),
                relay_url
            );

            match self.get_text(&relay_url).await {
                Ok(body) if looks_like_html(&body) => {
                    ::log::debug!("Relay {} returned {} bytes of HTML", template, body.len());
                    return Ok(body);
                }
                Ok(_) => {
                    let err = FetchError::MalformedContent(relay_url);
                    ::log::warn!("{}", err);
                    last = err.to_string();
                }
                Err(err) => {
                    ::log::warn!("Relay {} failed: {}", template, err);
                    last = err.to_string();
                }
            }
        }

        ::log::error!("All relays failed for {}", url);
        Err(FetchError::RelaysExhausted {
            attempts: self.relay_endpoints.len(),
            last,
        })
    }
}

impl Fetcher for WebFetcher {
    async fn fetch_html(&self, url: &Url) -> Result<String, FetchError> {
        match self.mode {
            FetchMode::Direct => self.fetch_direct(url).await,
            FetchMode::Relay => self.fetch_via_relays(url).await,
        }
    }
}

/// Expands a relay template for `target`
pub fn relay_url(template: &str, target: &Url) -> String {
    let encoded: String = byte_serialize(target.as_str().as_bytes()).collect();
    if template.contains(URL_PLACEHOLDER) {
        template.replace(URL_PLACEHOLDER, &encoded)
    } else {
        format!("{}{}", template, encoded)
    }
}
