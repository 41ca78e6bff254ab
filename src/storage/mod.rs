//! String key-value persistence shared by the form and chat managers.
//!
//! Values are opaque strings; structured data is serialized by the caller.
//! The browser backend survives reloads, the in-memory one lives as long as
//! the page and is what tests run against.


mod local;
mod memory;

use std::ops::Deref;
use std::rc::Rc;

use log::warn;
use thiserror::Error;

pub use local::LocalStore;
pub use memory::MemoryStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available in this browsing context")]
    Unavailable,
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("stored value under `{key}` is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Synchronous string store. A failed `set` leaves the previous value intact.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Cheap handle to the page-wide store, suitable for Yew context.
#[derive(Clone)]
pub struct SharedStore(Rc<dyn KeyValueStore>);

impl SharedStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for SharedStore {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Opens `localStorage`, falling back to a page-lifetime memory store.
pub fn open_default() -> SharedStore {
    match LocalStore::open() {
        Ok(store) => SharedStore::new(store),
        Err(e) => {
            warn!("{}, persisting to memory for this page view", e);
            SharedStore::new(MemoryStore::default())
        }
    }
}
