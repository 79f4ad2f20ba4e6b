mod detail;
mod issue;
mod page;
mod pagination;
mod search;
mod user;

pub use detail::{Detail, Wrapped};
pub use issue::{
    CreateIssueRequest, CreateIssueResponse, IssueDetail, IssueListItem, ListIssuesResponse,
    UpdateIssueRequest, UpdateIssueResponse,
};
pub use page::{
    CreatePageRequest, CreatePageResponse, ListPagesResponse, PageDetail, PageListItem,
    UpdatePageRequest, UpdatePageResponse,
};
pub use pagination::Pagination;
pub use search::{SearchResponse, SearchResult, SearchType};
pub use user::User;

/// Fields the client does not model, kept in server order for printing.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Read `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(<Option<T> as serde::Deserialize>::deserialize(deserializer)?.unwrap_or_default())
}
