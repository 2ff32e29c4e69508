use anyhow::{anyhow, bail, Result};
use aiorzea_lib::types::Record;
use aiorzea_lib::xivapi::Client;
use aiorzea_lib::{FilterClause, Language, SearchQuery};
use clap::{ArgAction, Args};

use crate::output::{
    print_json, print_records_csv, print_records_markdown, print_records_table, OutputFormat,
};

#[derive(Args)]
pub struct SearchArgs {
    /// Comma-separated sheet names (e.g. Item,Mount)
    #[arg(long)]
    pub sheets: String,

    /// Comma-separated field names, or * for all fields
    #[arg(long, default_value = "*")]
    pub fields: String,

    /// Pre-formatted filter string (e.g. 'Name="Clarent"')
    #[arg(long, conflicts_with = "clause", required_unless_present = "clause")]
    pub query: Option<String>,

    /// Filter clause as FIELD OP VALUE; repeat to AND several clauses
    #[arg(
        long,
        num_args = 3,
        value_names = ["FIELD", "OP", "VALUE"],
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub clause: Vec<String>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,

    /// Language for text fields: en, ja, de, fr
    #[arg(long)]
    pub language: Option<String>,
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = SearchQuery::new(&args.sheets, &args.fields);

    query = match &args.query {
        Some(raw) => query.with_query(raw),
        None => query.with_clauses(&clauses_from_args(&args.clause)?),
    };

    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }

    if let Some(ref language) = args.language {
        let lang = language.parse::<Language>().map_err(|e| anyhow!(e))?;
        query = query.with_language(lang);
    }

    let results = client.search(&query).await?;
    print_results(&results, format)
}

/// Groups the flat `--clause` values into triples.
fn clauses_from_args(values: &[String]) -> Result<Vec<FilterClause>> {
    if values.is_empty() || values.len() % 3 != 0 {
        bail!("each --clause takes exactly FIELD OP VALUE");
    }
    Ok(values
        .chunks(3)
        .map(|c| FilterClause::new(c[0].as_str(), c[1].as_str(), c[2].as_str()))
        .collect())
}

pub fn print_results(results: &[Record], format: &OutputFormat) -> Result<()> {
    eprintln!("{} results", results.len());

    match format {
        OutputFormat::Table => print_records_table(results),
        OutputFormat::Json => print_json(&results),
        OutputFormat::Csv => print_records_csv(results)?,
        OutputFormat::Markdown => print_records_markdown(results),
    }

    Ok(())
}
