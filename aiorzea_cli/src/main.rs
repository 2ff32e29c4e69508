mod commands;
mod output;

use std::sync::Arc;

use aiorzea_lib::xivapi::Client;
use aiorzea_lib::{query_tools, Settings};
use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "aiorzea")]
#[command(about = "Query Final Fantasy XIV game data from XIVAPI")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sheets XIVAPI can search
    Sheets(commands::sheets::SheetsArgs),
    /// Search one or more sheets
    Search(commands::search::SearchArgs),
    /// Search the Item sheet with a filter string
    Item(commands::item::ItemArgs),
    /// Show the tools offered to the assistant
    Tools(commands::tools::ToolsArgs),
    /// Invoke a tool with JSON arguments, as the assistant would
    Call(commands::call::CallArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aiorzea=info".parse()?)
                .add_directive("xivapi=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let settings = Settings::from_env();

    match &cli.command {
        Commands::Sheets(args) => {
            commands::sheets::run(args, &*connect(&settings).await?, &format)?
        }
        Commands::Search(args) => {
            commands::search::run(args, &*connect(&settings).await?, &format).await?
        }
        Commands::Item(args) => {
            commands::item::run(args, &*connect(&settings).await?, &format).await?
        }
        // Static definitions only; no sheet discovery.
        Commands::Tools(args) => commands::tools::run(args, &settings, &format)?,
        Commands::Call(args) => {
            let registry = query_tools(connect(&settings).await?);
            commands::call::run(args, &registry).await?
        }
    }

    Ok(())
}

async fn connect(settings: &Settings) -> Result<Arc<Client>> {
    Ok(Arc::new(settings.connect().await?))
}
