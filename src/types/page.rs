use serde::{Deserialize, Serialize};

use super::{Extra, Pagination, User, Wrapped};

/// GET /api/pages
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ListPagesResponse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub pages: Vec<PageListItem>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub users: Vec<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PageListItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /api/pages/{id}, bare or wrapped under `page`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PageDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "docContent", skip_serializing_if = "Option::is_none")]
    pub doc_content: Option<String>,
    #[serde(rename = "markdownPreview", skip_serializing_if = "Option::is_none")]
    pub markdown_preview: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "organizationId", skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Wrapped for PageDetail {
    const KEY: &'static str = "page";
}

/// POST /api/pages/markdown
#[derive(Serialize, Debug, Clone)]
pub struct CreatePageRequest {
    pub title: String,
    pub markdown: String,
}

impl CreatePageRequest {
    /// Blank markdown falls back to the title so the page is never empty.
    pub fn new(title: String, markdown: Option<String>) -> Self {
        let markdown = markdown
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| title.clone());
        Self { title, markdown }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CreatePageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageDetail>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// PUT /api/pages/{id}/markdown
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdatePageRequest {
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "skipSync", skip_serializing_if = "Option::is_none")]
    pub skip_sync: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UpdatePageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageDetail>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_markdown_defaults_to_title() {
        let req = CreatePageRequest::new("Roadmap".to_string(), Some("  \n".to_string()));
        assert_eq!(req.markdown, "Roadmap");

        let req = CreatePageRequest::new("Roadmap".to_string(), None);
        assert_eq!(req.markdown, "Roadmap");
    }

    #[test]
    fn explicit_markdown_is_kept_verbatim() {
        let req = CreatePageRequest::new("Roadmap".to_string(), Some(" # Q3\n".to_string()));
        assert_eq!(req.markdown, " # Q3\n");
    }
}
