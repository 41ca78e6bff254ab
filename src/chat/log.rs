//! Append-only chat history kept under a single storage key.
//!
//! The whole history is rewritten on every append as a JSON array of
//! `{"message": ..., "role": "user" | "bot"}` records. The read-modify-write
//! is not atomic across tabs: two tabs appending at once can lose a message.

#[cfg(test)]
#[path = "log_test.rs"]
mod log_test;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::storage::{SharedStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "user-message",
            Role::Bot => "bot-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    message: String,
    role: Role,
}

impl ChatMessage {
    /// Trims `text`; whitespace-only input yields `None`.
    pub fn new(text: &str, role: Role) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            message: text.to_string(),
            role,
        })
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

#[derive(Clone, PartialEq)]
pub struct ChatLog {
    store: SharedStore,
}

impl ChatLog {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Appends one message and rewrites the stored history.
    ///
    /// Returns the message that was stored, or `Ok(None)` when `text` is blank.
    pub fn append(&self, text: &str, role: Role) -> Result<Option<ChatMessage>, StorageError> {
        let Some(message) = ChatMessage::new(text, role) else {
            return Ok(None);
        };
        self.push(&message)?;
        Ok(Some(message))
    }

    fn push(&self, message: &ChatMessage) -> Result<(), StorageError> {
        let mut history = self.load();
        history.push(message.clone());
        let encoded = serde_json::to_string(&history).map_err(|e| StorageError::Write {
            key: config::CHAT_LOG_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(config::CHAT_LOG_KEY, &encoded)
    }

    /// Stored history in chronological order. Never writes.
    pub fn load(&self) -> Vec<ChatMessage> {
        match self.try_load() {
            Ok(history) => history,
            Err(e) => {
                warn!("{}, starting with an empty chat", e);
                Vec::new()
            }
        }
    }

    /// Hands every stored message to `render`, oldest first.
    pub fn replay<F>(&self, mut render: F) -> usize
    where
        F: FnMut(&ChatMessage),
    {
        let history = self.load();
        history.iter().for_each(&mut render);
        history.len()
    }

    fn try_load(&self) -> Result<Vec<ChatMessage>, StorageError> {
        let Some(raw) = self.store.get(config::CHAT_LOG_KEY) else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
            key: config::CHAT_LOG_KEY.to_string(),
            reason: e.to_string(),
        })
    }
}
