use clap::Parser;
use seo_lens::{AnalyzerConfig, FetchMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-lens")]
#[command(about = "Checks a web page's meta tags and scores its SEO completeness")]
#[command(version)]
pub struct Args {
    /// Page to analyze (bare domains get https://)
    #[arg(required_unless_present = "serve")]
    pub url: Option<String>,

    /// Run the HTTP service instead of analyzing a single URL
    #[arg(long)]
    pub serve: bool,

    /// Address for the HTTP service, e.g. 0.0.0.0:5000
    #[arg(long)]
    pub bind: Option<String>,

    /// Fetch through relay endpoints instead of directly
    #[arg(long)]
    pub relay: bool,

    /// Relay endpoint template, `{url}` is replaced by the target (repeatable, implies --relay)
    #[arg(long = "relay-endpoint", value_name = "TEMPLATE")]
    pub relay_endpoints: Vec<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Layers command-line overrides on top of the (file or default) configuration
    pub fn resolve_config(&self) -> Result<AnalyzerConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)?,
            None => AnalyzerConfig::default(),
        };

        if self.relay || !self.relay_endpoints.is_empty() {
            config.fetch_mode = FetchMode::Relay;
        }
        if !self.relay_endpoints.is_empty() {
            config.relay_endpoints = self.relay_endpoints.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(bind) = &self.bind {
            config.bind_address = bind.clone();
        }
        Ok(config)
    }
}
