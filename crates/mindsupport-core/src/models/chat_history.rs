use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A chat transcript between a student and the scripted support companion.
///
/// Serialized as JSON so the host can keep it in whatever local storage
/// it has; the transcript itself never touches disk.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatHistory {
    pub id: Uuid,
    pub messages: Vec<ChatHistoryMessage>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ChatHistory {
    pub fn new() -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn push(&mut self, message: ChatHistoryMessage) -> &ChatHistoryMessage {
        self.updated_at = message.timestamp;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn last(&self) -> Option<&ChatHistoryMessage> {
        self.messages.last()
    }

    /// True if any bot reply in the transcript was a crisis response.
    pub fn has_crisis(&self) -> bool {
        self.messages.iter().any(|m| m.is_crisis)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// A single message in a chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatHistoryMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: jiff::Timestamp,
    /// Set on bot replies to messages that tripped the crisis detector.
    #[serde(default)]
    pub is_crisis: bool,
}

impl ChatHistoryMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content.into(), false)
    }

    pub fn bot(content: impl Into<String>, is_crisis: bool) -> Self {
        Self::new(ChatRole::Bot, content.into(), is_crisis)
    }

    fn new(role: ChatRole, content: String, is_crisis: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            timestamp: jiff::Timestamp::now(),
            is_crisis,
        }
    }
}

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatRole {
    User,
    Bot,
}
