use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

#[cfg(feature = "hydrate")]
use crate::error::{AppError, AppResult};
#[cfg(feature = "hydrate")]
use blog_search_api_types::SearchResult;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `endpoint` with `query` appended as the `q` parameter.
pub fn search_url(endpoint: &str, query: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{endpoint}{separator}q={}",
        utf8_percent_encode(query, QUERY_VALUE)
    )
}

/// Asks the blog backend for posts matching `query`.
///
/// The request is never aborted; the caller decides whether the answer is
/// still wanted.
#[cfg(feature = "hydrate")]
pub async fn search_posts(endpoint: &str, query: &str) -> AppResult<Vec<SearchResult>> {
    let url = search_url(endpoint, query);
    let response = gloo_net::http::Request::get(&url).send().await?;
    if !response.ok() {
        return Err(AppError::Status(response.status()));
    }
    let json = response.text().await?;
    Ok(serde_json::from_str(&json)?)
}
