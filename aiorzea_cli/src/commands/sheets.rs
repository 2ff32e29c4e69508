use anyhow::Result;
use aiorzea_lib::xivapi::Client;
use clap::Args;

use crate::output::{
    print_json, print_sheets_csv, print_sheets_markdown, print_sheets_table, OutputFormat,
};

#[derive(Args)]
pub struct SheetsArgs {
    /// Only list sheets whose name contains this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,
}

pub fn run(args: &SheetsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let sheets: Vec<String> = match args.filter.as_deref() {
        Some(needle) => {
            let needle = needle.to_lowercase();
            client
                .sheets()
                .iter()
                .filter(|s| s.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        None => client.sheets().to_vec(),
    };

    eprintln!("{} of {} sheets", sheets.len(), client.sheets().len());

    match format {
        OutputFormat::Table => print_sheets_table(&sheets),
        OutputFormat::Json => print_json(&sheets),
        OutputFormat::Csv => print_sheets_csv(&sheets)?,
        OutputFormat::Markdown => print_sheets_markdown(&sheets),
    }

    Ok(())
}
