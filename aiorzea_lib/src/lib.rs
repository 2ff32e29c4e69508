//! Library layer for aiorzea: XIVAPI query tools, agent configuration and settings.
//!
//! Wraps the `xivapi` crate with a tool interface an agent framework can
//! call by name, plus the immutable agent-group wiring of the assistant.

pub mod agents;
pub mod config;
pub mod error;
pub mod tools;

pub use xivapi;
pub use xivapi::types;
pub use xivapi::{FilterClause, Language, SearchQuery};

pub use agents::{AgentGroup, Assembly};
pub use config::Settings;
pub use error::AiorzeaError;
pub use tools::{query_tool_definitions, query_tools, Tool, ToolDefinition, ToolRegistry};
