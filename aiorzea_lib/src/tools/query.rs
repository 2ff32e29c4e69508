//! XIVAPI search tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use xivapi::{Client, FilterClause};

use super::registry::{Tool, ToolDefinition, ToolRegistry};
use crate::error::AiorzeaError;

pub const GENERAL_QUERY: &str = "general_query";
pub const ITEM_QUERY: &str = "item_query";

const GENERAL_QUERY_DESCRIPTION: &str = "\
Query the XIVAPI game database for the given sheets, fields and filters. \
`sheets` is a comma-separated list of sheet names; common ones are Item (game items), \
Achievement, Mount and Action (skills and actions). \
`fields` is a comma-separated list of field names to return, or * for all fields. \
`queries` is a list of filters, each a list of three elements: field, operator and value, \
where the value may be a string or a number, for example [[\"ClassJob.Abbreviation\", \"=\", \"BRD\"], [\"ClassJobLevel\", \"=\", \"92\"]]. \
All filters must match. String values naming an item or action are usually capitalized \
on every word and must be wrapped in double quotes. Returns the matching records.";

const ITEM_QUERY_DESCRIPTION: &str = "\
Search the Item sheet of the XIVAPI game database and return every field of the matching items. \
`query` is a filter string such as Name=\"Clarent\" or Name~\"Clarent\" (partial match); \
several space-separated filters must all match.";

/// Arguments of `general_query`. `queries` is checked by [`clauses_from_value`].
#[derive(Deserialize)]
struct GeneralQueryArgs {
    sheets: String,
    fields: String,
    queries: Value,
}

/// Turns `queries` into clauses. Accepts a list of `[field, operator, value]`
/// triples or one bare triple; numbers and booleans are written as they
/// appear in JSON.
fn clauses_from_value(queries: Value) -> Result<Vec<FilterClause>, AiorzeaError> {
    let invalid = |msg: String| {
        AiorzeaError::InvalidInput(format!("{} arguments: {}", GENERAL_QUERY, msg))
    };
    let Value::Array(items) = queries else {
        return Err(invalid(
            "queries must be a list of [field, operator, value] triples".to_string(),
        ));
    };

    let triples = if items.iter().all(Value::is_array) {
        items
    } else {
        vec![Value::Array(items)]
    };

    triples
        .into_iter()
        .map(|triple| {
            let Value::Array(parts) = triple else {
                return Err(invalid(
                    "queries must be a list of [field, operator, value] triples".to_string(),
                ));
            };
            if parts.len() != 3 {
                return Err(invalid(format!(
                    "each query needs exactly 3 elements (field, operator, value), got {}",
                    parts.len()
                )));
            }
            let parts = parts
                .iter()
                .map(|part| scalar_to_string(part).ok_or_else(|| {
                    invalid(format!(
                        "query elements must be strings or numbers, got {}",
                        part
                    ))
                }))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(FilterClause::new(
                parts[0].as_str(),
                parts[1].as_str(),
                parts[2].as_str(),
            ))
        })
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[derive(Deserialize)]
struct ItemQueryArgs {
    query: String,
}

fn parse_args<T: serde::de::DeserializeOwned>(tool: &str, args: Value) -> Result<T, AiorzeaError> {
    serde_json::from_value(args)
        .map_err(|e| AiorzeaError::InvalidInput(format!("{} arguments: {}", tool, e)))
}

fn general_query_definition() -> ToolDefinition {
    ToolDefinition::new(GENERAL_QUERY, GENERAL_QUERY_DESCRIPTION)
        .with_parameters(json!({
            "type": "object",
            "properties": {
                "sheets": {
                    "type": "string",
                    "description": "Comma-separated sheet names, e.g. Item,Mount"
                },
                "fields": {
                    "type": "string",
                    "description": "Comma-separated field names, or * for all fields"
                },
                "queries": {
                    "type": "array",
                    "description": "Filters as [field, operator, value] triples",
                    "items": {
                        "type": "array",
                        "items": { "type": ["string", "number", "boolean"] },
                        "minItems": 3,
                        "maxItems": 3
                    },
                    "minItems": 1
                }
            },
            "required": ["sheets", "fields", "queries"]
        }))
}

fn item_query_definition() -> ToolDefinition {
    ToolDefinition::new(ITEM_QUERY, ITEM_QUERY_DESCRIPTION).with_parameters(
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Filter string, e.g. Name=\"Clarent\""
                }
            },
            "required": ["query"]
        }),
    )
}

/// Definitions of the tools in [`query_tools`], available without a client.
pub fn query_tool_definitions() -> Vec<ToolDefinition> {
    vec![general_query_definition(), item_query_definition()]
}

/// General search over any sheets with structured filter clauses.
pub struct GeneralQueryTool {
    client: Arc<Client>,
    definition: ToolDefinition,
}

impl GeneralQueryTool {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            definition: general_query_definition(),
        }
    }
}

#[async_trait]
impl Tool for GeneralQueryTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, args: Value) -> Result<Value, AiorzeaError> {
        let args: GeneralQueryArgs = parse_args(GENERAL_QUERY, args)?;
        let clauses = clauses_from_value(args.queries)?;
        let results = self
            .client
            .query_clauses(&args.sheets, &args.fields, &clauses)
            .await?;
        Ok(Value::Array(results))
    }
}

/// Item lookup with a pre-formatted filter string.
pub struct ItemQueryTool {
    client: Arc<Client>,
    definition: ToolDefinition,
}

impl ItemQueryTool {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            definition: item_query_definition(),
        }
    }
}

#[async_trait]
impl Tool for ItemQueryTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, args: Value) -> Result<Value, AiorzeaError> {
        let args: ItemQueryArgs = parse_args(ITEM_QUERY, args)?;
        let results = self.client.query_item(&args.query).await?;
        Ok(Value::Array(results))
    }
}

/// Registry holding `general_query` and `item_query`, both backed by `client`.
pub fn query_tools(client: Arc<Client>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GeneralQueryTool::new(Arc::clone(&client))));
    registry.register(Arc::new(ItemQueryTool::new(client)));
    registry
}
