use serde::{Deserialize, Serialize};

/// Cursor pagination metadata returned by list endpoints.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Pagination {
    #[serde(deserialize_with = "super::null_as_default")]
    pub total: u64,
    #[serde(rename = "hasMore", deserialize_with = "super::null_as_default")]
    pub has_more: bool,
    /// Opaque token for `--cursor`; echoed back verbatim.
    #[serde(rename = "nextCursor")]
    pub next_cursor: Option<String>,
}
