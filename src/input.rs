use crate::error::InputError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Matches any `scheme://` prefix so that e.g. `ftp://` is rejected instead of prefixed
static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme pattern is valid")
});

/// Prefixes `https://` when the input carries no scheme
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if SCHEME_RE.is_match(trimmed) {
        // Left as-is; validation rejects it with a clearer error
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Normalizes and validates a user supplied URL before any network activity
pub fn parse_target(input: &str) -> Result<Url, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let normalized = normalize(input);
    let url = Url::parse(&normalized).map_err(|e| InputError::Unparseable {
        url: normalized.clone(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(InputError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(InputError::MissingHost(normalized));
    }

    ::log::debug!("Normalized input '{}' to {}", input, url);
    Ok(url)
}
