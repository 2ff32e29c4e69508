use anyhow::Result;
use aiorzea_lib::xivapi::Client;
use aiorzea_lib::SearchQuery;
use clap::Args;

use super::search::print_results;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ItemArgs {
    /// Filter string (e.g. 'Name="Clarent"' or 'Name~"Clarent"')
    pub query: String,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(args: &ItemArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let results = match args.limit {
        Some(limit) => {
            let query = SearchQuery::new("Item", "*")
                .with_query(&args.query)
                .with_limit(limit);
            client.search(&query).await?
        }
        None => client.query_item(&args.query).await?,
    };
    print_results(&results, format)
}
