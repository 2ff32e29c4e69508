//! Runtime settings read from the process environment.

use std::time::Duration;

use crate::error::AiorzeaError;

pub const DEFAULT_MODEL: &str = "gpt-4o";

const MODEL_VAR: &str = "AIORZEA_MODEL";
const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";
const XIVAPI_KEY_VAR: &str = "XIVAPI_PRIVATE_KEY";
const XIVAPI_BASE_URL_VAR: &str = "XIVAPI_BASE_URL";
const MIN_INTERVAL_VAR: &str = "XIVAPI_MIN_INTERVAL_MS";

/// Settings for the query client and the agent group.
///
/// Empty variables count as unset.
#[derive(Clone, Debug)]
pub struct Settings {
    pub model: String,
    pub openai_api_key: Option<String>,
    pub xivapi_key: Option<String>,
    pub xivapi_base_url: String,
    pub min_interval: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|val| !val.is_empty());
        Self {
            model: get(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_api_key: get(OPENAI_KEY_VAR),
            xivapi_key: get(XIVAPI_KEY_VAR),
            xivapi_base_url: get(XIVAPI_BASE_URL_VAR)
                .unwrap_or_else(|| xivapi::DEFAULT_BASE_URL.to_string()),
            min_interval: get(MIN_INTERVAL_VAR)
                .and_then(|val| val.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(xivapi::pacing::DEFAULT_MIN_INTERVAL),
        }
    }

    /// API key for the configured model's provider.
    ///
    /// Only OpenAI (`gpt*`) models are supported.
    pub fn llm_api_key(&self) -> Result<&str, AiorzeaError> {
        if !is_openai_model(&self.model) {
            return Err(AiorzeaError::Config(format!(
                "No API key found for model {}.",
                self.model
            )));
        }
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| AiorzeaError::Config(format!("{} is not set.", OPENAI_KEY_VAR)))
    }

    /// Connects a query client, running sheet discovery.
    pub async fn connect(&self) -> Result<xivapi::Client, AiorzeaError> {
        let client =
            xivapi::Client::with_base_url(&self.xivapi_base_url, self.xivapi_key.clone()).await?;
        Ok(client.with_min_interval(self.min_interval))
    }
}

fn is_openai_model(model: &str) -> bool {
    model.starts_with("gpt")
}
