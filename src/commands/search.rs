use crate::cli::SearchArgs;
use crate::client::{MagnetClient, QueryParams};
use crate::error::Result;
use crate::output;
use crate::types::{SearchResponse, SearchType};

const SEARCH_PATH: &str = "/api/search";

pub async fn run(client: &MagnetClient, args: SearchArgs) -> Result<()> {
    let query = search_query(&args.query, &args.types);
    let response: SearchResponse = client.get(SEARCH_PATH, &query).await?;
    output::print_json(&response)
}

fn search_query(query: &str, types: &[SearchType]) -> QueryParams {
    let types = types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    QueryParams::new()
        .set("query", Some(query))
        .set("types", Some(types))
}
