//! Conversation sent to the provider for one question

use crate::core::cache_manager::CacheKey;
use crate::core::types::ChatMessage;

/// A system instruction followed by the user's question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(system_prompt: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(question),
            ],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }

    /// The user's question
    pub fn question(&self) -> &str {
        self.messages
            .last()
            .map(|message| message.content.as_str())
            .unwrap_or_default()
    }

    /// Cache key over the ordered message contents
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::from_messages(&self.messages)
    }
}
