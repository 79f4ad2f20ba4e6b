use serde::{Deserialize, Serialize};

use super::Extra;

/// User referenced by list and search results, for display joins.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
