use thiserror::Error;

/// Problems with the URL supplied by the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a URL")]
    Empty,

    #[error("Invalid URL '{url}': {reason}")]
    Unparseable { url: String, reason: String },

    #[error("Unsupported URL scheme '{0}', only http and https are allowed")]
    UnsupportedScheme(String),

    #[error("URL '{0}' has no host")]
    MissingHost(String),
}

/// Failures while retrieving the page HTML
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be built
    #[error("HTTP client initialization error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch the URL: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The body did not contain an `<html>` ... `</html>` document
    #[error("Response from {0} does not look like an HTML document")]
    MalformedContent(String),

    /// Every relay endpoint failed; carries the last failure message
    #[error("All {attempts} relay endpoints failed, last error: {last}")]
    RelaysExhausted { attempts: usize, last: String },
}

/// Failures while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for a single page analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AnalysisError {
    /// HTTP status the service responds with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AnalysisError::InvalidInput(_) => 400,
            AnalysisError::Fetch(_) => 500,
        }
    }
}
