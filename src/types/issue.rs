use serde::{Deserialize, Serialize};

use super::{Extra, Pagination, User, Wrapped};

/// GET /api/issues
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ListIssuesResponse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub issues: Vec<IssueListItem>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub users: Vec<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct IssueListItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "baseBranch", skip_serializing_if = "Option::is_none")]
    pub base_branch: Option<String>,
    #[serde(rename = "branchName", skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "createdClerkId", skip_serializing_if = "Option::is_none")]
    pub created_clerk_id: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /api/issues/{id}, bare or wrapped under `issue`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct IssueDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "baseBranch", skip_serializing_if = "Option::is_none")]
    pub base_branch: Option<String>,
    #[serde(rename = "branchName", skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    /// Full markdown body; absent when a preview was requested.
    #[serde(rename = "docContent", skip_serializing_if = "Option::is_none")]
    pub doc_content: Option<String>,
    #[serde(rename = "markdownPreview", skip_serializing_if = "Option::is_none")]
    pub markdown_preview: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "createdClerkId", skip_serializing_if = "Option::is_none")]
    pub created_clerk_id: Option<String>,
    #[serde(rename = "organizationId", skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Wrapped for IssueDetail {
    const KEY: &'static str = "issue";
}

/// POST /api/issues/markdown
#[derive(Serialize, Debug, Clone)]
pub struct CreateIssueRequest {
    pub markdown: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "baseBranch")]
    pub base_branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The created id, the created issue, or both.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CreateIssueResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueDetail>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// PUT /api/issues/{id}/markdown
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateIssueRequest {
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "assigneeId", skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    /// Ask the server not to push the edit to live collaborative sessions.
    #[serde(rename = "skipSync", skip_serializing_if = "Option::is_none")]
    pub skip_sync: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UpdateIssueResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueDetail>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_request_omits_unset_fields() {
        let req = CreateIssueRequest {
            markdown: "x".to_string(),
            description: "x".to_string(),
            title: None,
            base_branch: "main".to_string(),
            status: None,
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "markdown": "x", "description": "x", "baseBranch": "main" })
        );
    }

    #[test]
    fn update_request_uses_wire_names() {
        let req = UpdateIssueRequest {
            markdown: "body".to_string(),
            assignee_id: Some("user_1".to_string()),
            skip_sync: Some(true),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "markdown": "body", "assigneeId": "user_1", "skipSync": true })
        );
    }

    #[test]
    fn detail_keeps_unknown_fields() {
        let payload = json!({
            "id": "i1",
            "title": "Fix login",
            "markdownPreview": "# Fix",
            "priority": 2
        });

        let issue: IssueDetail = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(issue.markdown_preview.as_deref(), Some("# Fix"));
        assert_eq!(issue.doc_content, None);
        assert_eq!(serde_json::to_value(&issue).unwrap(), payload);
    }

    #[test]
    fn unknown_fields_print_in_server_order() {
        let raw = r#"{"id":"i1","zeta":1,"alpha":2,"mid":3}"#;
        let issue: IssueDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&issue).unwrap(), raw);
    }

    #[test]
    fn list_tolerates_missing_sections() {
        let list: ListIssuesResponse = serde_json::from_value(json!({})).unwrap();
        assert!(list.issues.is_empty());
        assert!(list.pagination.is_none());
    }

    #[test]
    fn list_reads_null_sections_as_empty() {
        let list: ListIssuesResponse = serde_json::from_value(json!({
            "issues": null,
            "users": null,
            "pagination": { "total": null, "hasMore": null, "nextCursor": null }
        }))
        .unwrap();

        assert!(list.issues.is_empty());
        assert!(list.users.is_empty());
        assert_eq!(list.pagination, Some(Pagination::default()));
    }
}
