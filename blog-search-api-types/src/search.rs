use serde::{Deserialize, Serialize};

/// One post matched by `/blog/search`, in the order the backend ranked it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchResult {
    pub slug: String,
    pub title: String,
    /// Already formatted for display by the backend.
    pub date_str: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
