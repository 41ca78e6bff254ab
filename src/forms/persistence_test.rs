use std::cell::RefCell;

use super::*;
use crate::storage::{KeyValueStore, MemoryStore};

struct FakeField {
    name: String,
    value: RefCell<String>,
}

impl FakeField {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: RefCell::new(value.to_string()),
        }
    }

    fn shown(&self) -> String {
        self.value.borrow().clone()
    }
}

impl FormField for FakeField {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

fn memory() -> (FieldMemory, SharedStore) {
    let store = SharedStore::new(MemoryStore::default());
    (FieldMemory::new(store.clone()), store)
}

// =============================================================
// remember / recall
// =============================================================

#[test]
fn remember_writes_under_field_name() {
    let (fields, store) = memory();
    fields.remember("email", "a@b.com").unwrap();
    assert_eq!(store.get("email").as_deref(), Some("a@b.com"));
}

#[test]
fn last_edit_wins() {
    let (fields, store) = memory();
    fields.remember("email", "A").unwrap();
    fields.remember("email", "B").unwrap();
    assert_eq!(store.get("email").as_deref(), Some("B"));

    let field = FakeField::new("email", "");
    assert_eq!(fields.restore([&field]), 1);
    assert_eq!(field.shown(), "B");
}

#[test]
fn unnamed_fields_are_skipped() {
    let (fields, store) = memory();
    fields.remember("", "orphan").unwrap();
    assert_eq!(store.get(""), None);
    assert_eq!(fields.recall(""), None);
}

#[test]
fn field_named_like_chat_log_cannot_clobber_it() {
    let (fields, store) = memory();
    store.set(config::CHAT_LOG_KEY, "[]").unwrap();
    fields.remember(config::CHAT_LOG_KEY, "oops").unwrap();
    assert_eq!(store.get(config::CHAT_LOG_KEY).as_deref(), Some("[]"));
}

#[test]
fn empty_stored_value_counts_as_absent() {
    let (fields, _) = memory();
    fields.remember("phone", "").unwrap();
    assert_eq!(fields.recall("phone"), None);
}

// =============================================================
// restore
// =============================================================

#[test]
fn edited_email_survives_reload() {
    let store = SharedStore::new(MemoryStore::default());
    FieldMemory::new(store.clone())
        .remember("email", "a@b.com")
        .unwrap();

    // A fresh manager over the same store stands in for the next page load.
    let email = FakeField::new("email", "");
    let restored = FieldMemory::new(store).restore([&email]);
    assert_eq!(restored, 1);
    assert_eq!(email.shown(), "a@b.com");
}

#[test]
fn fields_without_stored_value_keep_default() {
    let (fields, _) = memory();
    fields.remember("name", "Ada").unwrap();

    let name = FakeField::new("name", "");
    let grade = FakeField::new("grade", "Grade 1");
    assert_eq!(fields.restore([&name, &grade]), 1);
    assert_eq!(name.shown(), "Ada");
    assert_eq!(grade.shown(), "Grade 1");
}

#[test]
fn restore_is_idempotent() {
    let (fields, _) = memory();
    fields.remember("name", "Ada").unwrap();
    fields.remember("message", "Hello").unwrap();

    let name = FakeField::new("name", "");
    let message = FakeField::new("message", "");
    let other = FakeField::new("other", "default");

    fields.restore([&name, &message, &other]);
    let first = (name.shown(), message.shown(), other.shown());
    fields.restore([&name, &message, &other]);
    let second = (name.shown(), message.shown(), other.shown());
    assert_eq!(first, second);
}

#[test]
fn same_name_across_forms_shares_one_value() {
    let (fields, _) = memory();
    fields.remember("email", "student@school.org").unwrap();
    fields.remember("email", "parent@home.org").unwrap();

    let student_email = FakeField::new("email", "");
    let parent_email = FakeField::new("email", "");
    fields.restore([&student_email, &parent_email]);
    assert_eq!(student_email.shown(), "parent@home.org");
    assert_eq!(parent_email.shown(), "parent@home.org");
}

#[test]
fn restore_does_not_validate_values() {
    let (fields, _) = memory();
    fields.remember("age", "not a number").unwrap();
    let age = FakeField::new("age", "7");
    fields.restore([&age]);
    assert_eq!(age.shown(), "not a number");
}

// =============================================================
// Write failures
// =============================================================

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
fn failed_write_is_reported_and_keeps_old_value() {
    let seeded = MemoryStore::default();
    seeded.set("email", "a@b.com").unwrap();
    let fields = FieldMemory::new(SharedStore::new(FullStore(seeded)));

    let err = fields.remember("email", "new@b.com").unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "email"));
    assert_eq!(fields.recall("email").as_deref(), Some("a@b.com"));
}
