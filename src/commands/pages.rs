use tracing::info;

use crate::cli::{GetArgs, ListArgs, PageCreateArgs, PageUpdateArgs};
use crate::client::{path_segment, MagnetClient};
use crate::error::Result;
use crate::output;
use crate::types::{
    CreatePageRequest, CreatePageResponse, Detail, ListPagesResponse, PageDetail,
    UpdatePageRequest, UpdatePageResponse,
};

const PAGES_PATH: &str = "/api/pages";
const CREATE_PAGE_PATH: &str = "/api/pages/markdown";

pub async fn list(client: &MagnetClient, args: ListArgs) -> Result<()> {
    let query = super::list_query(&args);
    let response: ListPagesResponse = client.get(PAGES_PATH, &query).await?;
    output::print_json(&response)
}

pub async fn get(client: &MagnetClient, args: GetArgs) -> Result<()> {
    let path = format!("{PAGES_PATH}/{}", path_segment(&args.id));
    let detail: Detail<PageDetail> = client
        .get(&path, &super::detail_query(args.preview_only))
        .await?;
    output::print_json(&detail.into_inner())
}

pub async fn create(client: &MagnetClient, args: PageCreateArgs) -> Result<()> {
    let request = CreatePageRequest::new(args.title, args.markdown);
    let response: CreatePageResponse = client.post(CREATE_PAGE_PATH, &request).await?;
    if let Some(id) = &response.id {
        info!(%id, "created page");
    }
    output::print_json(&response)
}

pub async fn update(client: &MagnetClient, args: PageUpdateArgs) -> Result<()> {
    let path = format!("{PAGES_PATH}/{}/markdown", path_segment(&args.id));
    let request = UpdatePageRequest {
        markdown: args.markdown,
        title: args.title,
        skip_sync: args.skip_sync.then_some(true),
    };
    let response: UpdatePageResponse = client.put(&path, &request).await?;
    output::print_json(&response)
}
