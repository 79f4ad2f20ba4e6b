pub mod issues;
pub mod pages;
pub mod search;

use crate::cli::ListArgs;
use crate::client::QueryParams;
use crate::config::DEFAULT_LIST_LIMIT;

/// Page size to request. Zero counts as unset; a cursor without a positive
/// limit gets [`DEFAULT_LIST_LIMIT`] so pages stay a stable size.
pub fn effective_limit(limit: Option<u32>, cursor: Option<&str>) -> Option<u32> {
    let limit = limit.filter(|n| *n > 0);
    let has_cursor = cursor.is_some_and(|c| !c.is_empty());
    match limit {
        None if has_cursor => Some(DEFAULT_LIST_LIMIT),
        other => other,
    }
}

/// Query for the shared list endpoints: `search`, `limit`, `cursor`.
pub fn list_query(args: &ListArgs) -> QueryParams {
    let limit = effective_limit(args.limit, args.cursor.as_deref());
    QueryParams::new()
        .set("search", args.search.as_deref())
        .set("limit", limit.map(|n| n.to_string()))
        .set("cursor", args.cursor.as_deref())
}

/// Query for detail endpoints.
pub fn detail_query(preview_only: bool) -> QueryParams {
    QueryParams::new().set("previewOnly", preview_only.then_some("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(search: Option<&str>, limit: Option<u32>, cursor: Option<&str>) -> ListArgs {
        ListArgs {
            search: search.map(String::from),
            limit,
            cursor: cursor.map(String::from),
        }
    }

    #[test]
    fn cursor_without_limit_uses_default() {
        let query = list_query(&args(None, None, Some("next")));
        assert_eq!(query.get("limit"), Some("50"));
        assert_eq!(query.get("cursor"), Some("next"));
    }

    #[test]
    fn zero_limit_counts_as_unset() {
        assert_eq!(effective_limit(Some(0), None), None);
        assert_eq!(effective_limit(Some(0), Some("c")), Some(50));
    }

    #[test]
    fn explicit_limit_wins() {
        assert_eq!(effective_limit(Some(10), Some("c")), Some(10));
        assert_eq!(effective_limit(Some(10), None), Some(10));
    }

    #[test]
    fn no_flags_sends_no_params() {
        assert!(list_query(&args(None, None, None)).is_empty());
        assert!(list_query(&args(Some(""), None, Some(""))).is_empty());
    }

    #[test]
    fn detail_query_only_when_previewing() {
        assert!(detail_query(false).is_empty());
        assert_eq!(detail_query(true).get("previewOnly"), Some("true"));
    }
}
