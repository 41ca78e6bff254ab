#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::log::{ChatLog, ChatMessage, Role};
use super::responder::{CannedReplies, ReplyStrategy};
use crate::storage::SharedStore;

/// One visitor conversation: what was said, and who answers.
///
/// Messages are shown even when persisting them fails; the failure is only
/// logged.
#[derive(Clone)]
pub struct ChatSession {
    log: ChatLog,
    replies: Rc<RefCell<dyn ReplyStrategy>>,
}

impl ChatSession {
    pub fn new(store: SharedStore) -> Self {
        Self::with_strategy(store, CannedReplies::new())
    }

    pub fn with_strategy(store: SharedStore, strategy: impl ReplyStrategy + 'static) -> Self {
        Self {
            log: ChatLog::new(store),
            replies: Rc::new(RefCell::new(strategy)),
        }
    }

    /// Records a visitor message. Blank input is a no-op and returns `None`.
    pub fn send(&self, input: &str) -> Option<ChatMessage> {
        self.record(input, Role::User)
    }

    /// Picks and records the bot's answer to `user_message`.
    pub fn reply(&self, user_message: &str) -> Option<ChatMessage> {
        let text = self.replies.borrow_mut().respond(user_message);
        self.record(&text, Role::Bot)
    }

    /// Persisted conversation, oldest first.
    pub fn history(&self) -> Vec<ChatMessage> {
        let mut history = Vec::new();
        let count = self.log.replay(|m| history.push(m.clone()));
        debug!("Replaying {} chat message(s)", count);
        history
    }

    fn record(&self, text: &str, role: Role) -> Option<ChatMessage> {
        self.log.append(text, role).unwrap_or_else(|e| {
            warn!("Chat message not saved: {}", e);
            ChatMessage::new(text, role)
        })
    }
}

impl PartialEq for ChatSession {
    fn eq(&self, other: &Self) -> bool {
        self.log == other.log && Rc::ptr_eq(&self.replies, &other.replies)
    }
}
