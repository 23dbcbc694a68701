// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::RelayConfig;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    /// Missing, null or non-string values all become `""`.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub message: String,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: Role,
    pub content: String,
}

/// Body sent to the inference backend's `/v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Single user turn with the configured model and generation parameters.
    pub fn for_user_message(config: &RelayConfig, message: impl Into<String>) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![CompletionMessage {
                role: Role::User,
                content: message.into(),
            }],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}
