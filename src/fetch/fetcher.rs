use crate::error::FetchError;
use std::future::Future;
use url::Url;

/// Retrieves the raw HTML of a page
pub trait Fetcher {
    /// Fetch the document at `url`
    fn fetch_html(&self, url: &Url) -> impl Future<Output = Result<String, FetchError>> + Send;
}
