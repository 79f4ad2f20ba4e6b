use tracing::info;

use crate::cli::{GetArgs, IssueCreateArgs, IssueUpdateArgs, ListArgs};
use crate::client::{path_segment, MagnetClient};
use crate::error::Result;
use crate::output;
use crate::types::{
    CreateIssueRequest, CreateIssueResponse, Detail, IssueDetail, ListIssuesResponse,
    UpdateIssueRequest, UpdateIssueResponse,
};

const ISSUES_PATH: &str = "/api/issues";
const CREATE_ISSUE_PATH: &str = "/api/issues/markdown";

pub async fn list(client: &MagnetClient, args: ListArgs) -> Result<()> {
    let query = super::list_query(&args);
    let response: ListIssuesResponse = client.get(ISSUES_PATH, &query).await?;
    output::print_json(&response)
}

pub async fn get(client: &MagnetClient, args: GetArgs) -> Result<()> {
    let path = format!("{ISSUES_PATH}/{}", path_segment(&args.id));
    let detail: Detail<IssueDetail> = client
        .get(&path, &super::detail_query(args.preview_only))
        .await?;
    output::print_json(&detail.into_inner())
}

pub async fn create(client: &MagnetClient, args: IssueCreateArgs) -> Result<()> {
    let request = create_request(args);
    let response: CreateIssueResponse = client.post(CREATE_ISSUE_PATH, &request).await?;
    if let Some(id) = &response.id {
        info!(%id, "created issue");
    }
    output::print_json(&response)
}

pub async fn update(client: &MagnetClient, args: IssueUpdateArgs) -> Result<()> {
    let path = format!("{ISSUES_PATH}/{}/markdown", path_segment(&args.id));
    let request = update_request(args);
    let response: UpdateIssueResponse = client.put(&path, &request).await?;
    output::print_json(&response)
}

fn create_request(args: IssueCreateArgs) -> CreateIssueRequest {
    CreateIssueRequest {
        markdown: args.description.clone(),
        description: args.description,
        title: args.title.filter(|t| !t.is_empty()),
        base_branch: args.base_branch,
        status: args.status.filter(|s| !s.is_empty()),
    }
}

fn update_request(args: IssueUpdateArgs) -> UpdateIssueRequest {
    UpdateIssueRequest {
        markdown: args.markdown,
        title: args.title,
        status: args.status,
        assignee_id: args.assignee,
        skip_sync: args.skip_sync.then_some(true),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_sends_description_as_markdown() {
        let request = create_request(IssueCreateArgs {
            description: "Login fails".to_string(),
            title: Some(String::new()),
            base_branch: "main".to_string(),
            status: None,
        });

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "markdown": "Login fails", "description": "Login fails", "baseBranch": "main" })
        );
    }

    #[test]
    fn update_only_sends_skip_sync_when_set() {
        let request = update_request(IssueUpdateArgs {
            id: "i1".to_string(),
            markdown: "# Body".to_string(),
            title: Some("Title".to_string()),
            status: None,
            assignee: None,
            skip_sync: false,
        });

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "markdown": "# Body", "title": "Title" })
        );
    }
}
