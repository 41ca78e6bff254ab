use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::config;
use crate::storage::{KeyValueStore, MemoryStore, StorageError};

struct Fixed(&'static str);

impl ReplyStrategy for Fixed {
    fn pick_reply(&mut self) -> String {
        self.0.to_string()
    }
}

fn session() -> ChatSession {
    ChatSession::with_strategy(
        SharedStore::new(MemoryStore::default()),
        CannedReplies::with_rng(StdRng::seed_from_u64(11)),
    )
}

#[test]
fn whitespace_send_is_a_no_op() {
    let chat = session();
    assert_eq!(chat.send("   \n\t"), None);
    assert!(chat.history().is_empty());
}

#[test]
fn send_records_trimmed_user_message() {
    let chat = session();
    let msg = chat.send("  hello  ").unwrap();
    assert_eq!(msg.text(), "hello");
    assert_eq!(msg.role(), Role::User);
    assert_eq!(chat.history(), vec![msg]);
}

#[test]
fn reply_is_canned_and_recorded_after_the_question() {
    let chat = session();
    chat.send("hello").unwrap();
    let reply = chat.reply("hello").unwrap();

    assert_eq!(reply.role(), Role::Bot);
    assert!(config::CANNED_REPLIES.contains(&reply.text()));
    let history = chat.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role(), Role::User);
    assert_eq!(history[1], reply);
}

#[test]
fn strategy_can_be_swapped() {
    let chat = ChatSession::with_strategy(SharedStore::new(MemoryStore::default()), Fixed("Office hours are 8-4."));
    assert_eq!(chat.reply("hours?").unwrap().text(), "Office hours are 8-4.");
}

#[test]
fn blank_strategy_reply_is_dropped() {
    let chat = ChatSession::with_strategy(SharedStore::new(MemoryStore::default()), Fixed("  "));
    assert_eq!(chat.reply("hi"), None);
    assert!(chat.history().is_empty());
}

#[test]
fn clones_share_one_conversation() {
    let chat = session();
    let other = chat.clone();
    chat.send("one").unwrap();
    other.send("two").unwrap();
    let texts: Vec<String> = chat.history().iter().map(|m| m.text().to_string()).collect();
    assert_eq!(texts, vec!["one", "two"]);
    assert!(chat == other);
}

/// Serves what is already stored but refuses every write, like a full quota.
struct FullStore(MemoryStore);

impl KeyValueStore for FullStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "QuotaExceededError".to_string(),
        })
    }
}

#[test]
fn messages_still_show_when_saving_fails() {
    let old = r#"[{"message":"old","role":"user"}]"#;
    let seeded = MemoryStore::default();
    seeded.set(config::CHAT_LOG_KEY, old).unwrap();
    let store = SharedStore::new(FullStore(seeded));
    let chat = ChatSession::with_strategy(store.clone(), Fixed("Thanks for contacting us!"));

    assert_eq!(chat.send(" hi ").unwrap().text(), "hi");
    assert_eq!(chat.reply("hi").unwrap().text(), "Thanks for contacting us!");
    assert_eq!(store.get(config::CHAT_LOG_KEY).as_deref(), Some(old));
    assert_eq!(chat.history().len(), 1);
}
