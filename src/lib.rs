// Re-export modules
pub mod analyzer;
pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod parsers;
pub mod render;
pub mod results;
pub mod server;

// Re-export commonly used types for convenience
pub use analyzer::analyze;
pub use config::{AnalyzerConfig, FetchMode};
pub use error::{AnalysisError, FetchError, InputError};
pub use fetch::{Fetcher, WebFetcher};
pub use parsers::TagMap;
pub use results::AnalysisReport;

use std::path::Path;

/// Fetches, parses and scores a single page using the given fetcher
///
/// The input is normalized and validated before any network activity.
pub async fn analyze_with<F>(fetcher: &F, input: &str) -> Result<AnalysisReport, AnalysisError>
where
    F: Fetcher + Sync,
{
    let url = input::parse_target(input)?;
    let html = fetcher.fetch_html(&url).await?;
    let tags = parsers::html::parse(&html, &url);
    let report = analyze(&tags, url.as_str());

    ::log::info!("Analyzed {} - score {}/100", report.url, report.score);
    Ok(report)
}

/// Builder for analyzing one page
pub struct Analysis {
    url: String,
    config: AnalyzerConfig,
}

impl Analysis {
    /// Create a new analysis for the given URL (bare domains get `https://`)
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: AnalyzerConfig::default(),
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = AnalyzerConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = AnalyzerConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Fetch through the given relay templates instead of directly
    pub fn with_relay_endpoints(mut self, endpoints: Vec<String>) -> Self {
        self.config.fetch_mode = FetchMode::Relay;
        if !endpoints.is_empty() {
            self.config.relay_endpoints = endpoints;
        }
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    /// The configuration the analysis will run with
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fetch the page and produce its report
    pub async fn run(self) -> Result<AnalysisReport, AnalysisError> {
        let fetcher = WebFetcher::new(&self.config)?;
        analyze_with(&fetcher, &self.url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    /// Serves a fixed document and counts calls
    struct StaticFetcher {
        html: &'static str,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl Fetcher for StaticFetcher {
        async fn fetch_html(&self, _url: &Url) -> Result<String, FetchError> {
            self.calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(self.html.to_string())
        }
    }

    fn fetcher(html: &'static str) -> StaticFetcher {
        StaticFetcher {
            html,
            calls: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_analyze_with_normalizes_url() {
        let fetcher = fetcher(
            r#"<html><head><title>Example</title><link rel="icon" href="/fav.ico"></head></html>"#,
        );
        let report = analyze_with(&fetcher, "example.com").await.unwrap();

        assert_eq!(report.url, "https://example.com/");
        assert_eq!(report.title, "Example");
        assert_eq!(report.favicon, "https://example.com/fav.ico");
        assert_eq!(report.google_preview.url, "example.com/");
    }

    #[tokio::test]
    async fn test_invalid_input_never_fetches() {
        let fetcher = fetcher("<html></html>");
        let err = analyze_with(&fetcher, "  ").await.unwrap_err();

        assert!(matches!(err, AnalysisError::InvalidInput(InputError::Empty)));
        assert_eq!(fetcher.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[test]
    fn test_builder_relay_endpoints() {
        let analysis = Analysis::new("example.com")
            .with_relay_endpoints(vec!["https://relay.test/?{url}".to_string()])
            .with_timeout(3);
        assert_eq!(analysis.config().fetch_mode, FetchMode::Relay);
        assert_eq!(analysis.config().relay_endpoints.len(), 1);
        assert_eq!(analysis.config().timeout_secs, 3);

        // An empty list keeps the default relays
        let analysis = Analysis::new("example.com").with_relay_endpoints(vec![]);
        assert_eq!(analysis.config().relay_endpoints.len(), 3);
    }

    #[test]
    fn test_builder_config_str() {
        let analysis = Analysis::new("example.com")
            .with_config_str(r#"{"timeout_secs": 7}"#)
            .unwrap();
        assert_eq!(analysis.config().timeout_secs, 7);
        assert!(Analysis::new("x").with_config_str("not json").is_err());
    }
}
