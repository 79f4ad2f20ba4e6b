use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{Extra, User};

/// Resource kinds accepted by the `types` search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Issue,
    Page,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issue => write!(f, "issue"),
            Self::Page => write!(f, "page"),
        }
    }
}

/// GET /api/search
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub results: Vec<SearchResult>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub users: Vec<User>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// "issue" or "page". Kept as text so new kinds still print.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_scalars_and_lists_fall_back_to_defaults() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [{ "id": "i1", "type": "issue" }],
            "total": null,
            "query": null,
            "users": null
        }))
        .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.total, 0);
        assert_eq!(response.query, "");
        assert!(response.users.is_empty());
    }
}
