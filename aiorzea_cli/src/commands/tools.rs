use anyhow::Result;
use aiorzea_lib::{query_tool_definitions, AgentGroup, Settings, ToolDefinition};
use clap::Args;
use serde_json::json;

use crate::output::{print_json, print_tools_csv, print_tools_markdown, print_tools_table, OutputFormat};

#[derive(Args)]
pub struct ToolsArgs {
    /// Also print the agent group and tool bindings (needs OPENAI_API_KEY)
    #[arg(long)]
    pub agents: bool,
}

pub fn run(args: &ToolsArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let owned = query_tool_definitions();
    let definitions: Vec<&ToolDefinition> = owned.iter().collect();

    if args.agents {
        let assembly = AgentGroup::build(settings)?;
        print_json(&json!({ "tools": definitions, "assembly": assembly }));
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_tools_table(&definitions),
        OutputFormat::Json => print_json(&definitions),
        OutputFormat::Csv => print_tools_csv(&definitions)?,
        OutputFormat::Markdown => print_tools_markdown(&definitions),
    }

    Ok(())
}
