use anyhow::{Context, Result};
use aiorzea_lib::ToolRegistry;
use clap::Args;
use serde_json::Value;

#[derive(Args)]
pub struct CallArgs {
    /// Tool name (general_query or item_query)
    pub tool: String,

    /// Tool arguments as a JSON object (e.g. '{"query": "Name=\"Clarent\""}')
    pub args: String,
}

/// Invokes a tool exactly as an agent would and prints the string it gets back.
pub async fn run(args: &CallArgs, registry: &ToolRegistry) -> Result<()> {
    let tool_args: Value =
        serde_json::from_str(&args.args).context("tool arguments must be valid JSON")?;
    let out = registry.invoke(&args.tool, tool_args).await?;
    println!("{}", out);
    Ok(())
}
