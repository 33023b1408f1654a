use serde::Deserialize;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    #[default]
    LatestWins,
    // a slow older request can overwrite a newer one
    Arrival,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureDisplay {
    #[default]
    Silent,
    Message,
}

/// Settings for one search box. Every field has a default, so a page only
/// needs to pass the keys it wants to change.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    pub link_prefix: String,
    pub debounce_ms: u32,
    pub max_results: usize,
    pub input_id: String,
    pub results_id: String,
    pub wrapper_class: String,
    pub placeholder: String,
    /// `{query}` is replaced by the query.
    pub empty_message: String,
    pub failure_message: String,
    pub ordering: ResponseOrdering,
    pub failure_display: FailureDisplay,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "/blog/search".to_string(),
            link_prefix: "/blog/".to_string(),
            debounce_ms: 300,
            max_results: 8,
            input_id: "search-input".to_string(),
            results_id: "search-results".to_string(),
            wrapper_class: "search-wrap".to_string(),
            placeholder: "Search posts…".to_string(),
            empty_message: r#"No posts found for "{query}""#.to_string(),
            failure_message: "Search is unavailable right now".to_string(),
            ordering: ResponseOrdering::default(),
            failure_display: FailureDisplay::default(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.into())
    }

    /// CSS selector matching the wrapper element.
    pub fn wrapper_selector(&self) -> String {
        format!(".{}", self.wrapper_class)
    }
}
