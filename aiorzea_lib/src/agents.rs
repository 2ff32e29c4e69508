//! Agent roles, prompts and group-chat wiring for the game assistant.
//!
//! Everything here is plain data assembled once at startup and handed to
//! whatever chat runtime drives the conversation.

use serde::Serialize;

use crate::config::Settings;
use crate::error::AiorzeaError;
use crate::tools::{GENERAL_QUERY, ITEM_QUERY};

/// Word the assistant uses to hand control back to the human.
pub const TERMINATE: &str = "TERMINATE";

/// Maximum number of messages in one group chat.
pub const MAX_ROUND: u32 = 10;

const ASSISTANT_PROMPT: &str = "\
You are answering game-related questions of a player of Final Fantasy XIV. \
These questions may be related to in-game actions and items, such as the attributes of a gear. \
You have tools provided to you to query a game database. \
Use the tools to look for the information you need to answer the questions. \
When you finish answering a question or need human input, say \"TERMINATE\".";

const TOOL_EXECUTOR_PROMPT: &str = "Execute tools called by the assistant.";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LlmConfig {
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: String,
}

/// When an agent stops to ask the human for input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HumanInputMode {
    /// Before every reply.
    Always,
    /// Only when a received message says `TERMINATE` or the chat runs out of rounds.
    Terminate,
    Never,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgentSpec {
    pub name: String,
    pub system_message: Option<String>,
    /// `None` for agents that never call a model.
    pub llm: Option<LlmConfig>,
    pub human_input: HumanInputMode,
    /// Whether the agent may run code/tools locally. Never inside docker.
    pub executes_code: bool,
}

/// The three agents of the assistant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgentGroup {
    /// Stands in for the player; always asks for human input, no model.
    pub user_proxy: AgentSpec,
    /// Runs the tools the assistant asks for.
    pub tool_executor: AgentSpec,
    /// Model-backed agent that answers questions and calls tools.
    pub assistant: AgentSpec,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupChatConfig {
    /// Agent names in speaking order.
    pub agents: Vec<String>,
    pub max_round: u32,
    /// Model used by the manager to pick the next speaker.
    pub manager_llm: LlmConfig,
}

/// A tool made callable by `caller` and executed by `executor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToolBinding {
    pub tool: String,
    pub caller: String,
    pub executor: String,
}

/// Complete wiring of the assistant: agents, chat and tool bindings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Assembly {
    pub agents: AgentGroup,
    pub group_chat: GroupChatConfig,
    pub tools: Vec<ToolBinding>,
}

impl AgentGroup {
    /// Builds the agents and their chat/tool wiring.
    ///
    /// Fails when no API key is available for the configured model.
    pub fn build(settings: &Settings) -> Result<Assembly, AiorzeaError> {
        let llm = LlmConfig {
            model: settings.model.clone(),
            api_key: settings.llm_api_key()?.to_string(),
        };

        let agents = AgentGroup {
            user_proxy: AgentSpec {
                name: "user_proxy".to_string(),
                system_message: None,
                llm: None,
                human_input: HumanInputMode::Always,
                executes_code: true,
            },
            tool_executor: AgentSpec {
                name: "tool_executor".to_string(),
                system_message: Some(TOOL_EXECUTOR_PROMPT.to_string()),
                llm: None,
                human_input: HumanInputMode::Terminate,
                executes_code: true,
            },
            assistant: AgentSpec {
                name: "assistant".to_string(),
                system_message: Some(ASSISTANT_PROMPT.to_string()),
                llm: Some(llm.clone()),
                human_input: HumanInputMode::Terminate,
                executes_code: false,
            },
        };

        let group_chat = GroupChatConfig {
            agents: agents.members().map(|a| a.name.clone()).collect(),
            max_round: MAX_ROUND,
            manager_llm: llm,
        };

        let tools = [GENERAL_QUERY, ITEM_QUERY]
            .into_iter()
            .map(|tool| ToolBinding {
                tool: tool.to_string(),
                caller: agents.assistant.name.clone(),
                executor: agents.tool_executor.name.clone(),
            })
            .collect();

        tracing::debug!("Built agent group for model {}", settings.model);
        Ok(Assembly {
            agents,
            group_chat,
            tools,
        })
    }

    /// Agents in group-chat speaking order.
    pub fn members(&self) -> impl Iterator<Item = &AgentSpec> {
        [&self.user_proxy, &self.tool_executor, &self.assistant].into_iter()
    }
}
