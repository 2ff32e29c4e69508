//! Tools an agent can call, and the registry that dispatches them by name.

mod query;
mod registry;

pub use self::query::{
    query_tool_definitions, query_tools, GeneralQueryTool, ItemQueryTool, GENERAL_QUERY,
    ITEM_QUERY,
};
pub use self::registry::{Tool, ToolDefinition, ToolRegistry};
