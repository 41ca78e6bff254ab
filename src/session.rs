//! Per-visit UI state that used to live in page globals: which upload
//! inputs hold files and whether the chat popup is open.
//!
//! `App` owns the session through `use_reducer` and shares it via context.
//! A session starts with [`SiteSession::new`] and is torn down with
//! [`SessionAction::End`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::upload::SelectedFile;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteSession {
    uploads: BTreeMap<String, Vec<SelectedFile>>,
    chat_open: bool,
    ended: bool,
}

pub enum SessionAction {
    ToggleChat,
    FilesSelected { input_id: String, files: Vec<SelectedFile> },
    FileRemoved { input_id: String },
    /// Visit resumed, e.g. the page came back from the back/forward cache.
    Start,
    End,
}

pub type SessionContext = UseReducerHandle<SiteSession>;

impl SiteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chat_open(&self) -> bool {
        self.chat_open
    }

    pub fn uploads(&self, input_id: &str) -> &[SelectedFile] {
        self.uploads.get(input_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.values().map(Vec::len).sum()
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Applies one action in place. Until a `Start`, actions after `End`
    /// are ignored.
    pub fn apply(&mut self, action: SessionAction) {
        if self.is_ended() && !matches!(action, SessionAction::Start) {
            return;
        }
        match action {
            SessionAction::Start => {
                if self.ended {
                    debug!("Site session restarted");
                    *self = Self::new();
                }
            }
            SessionAction::ToggleChat => {
                self.chat_open = !self.chat_open;
            }
            SessionAction::FilesSelected { input_id, files } => {
                if files.is_empty() {
                    self.uploads.remove(&input_id);
                } else {
                    let count = files.len();
                    self.uploads.insert(input_id.clone(), files);
                    debug!("{} file(s) selected in #{}, {} this visit", count, input_id, self.upload_count());
                }
            }
            SessionAction::FileRemoved { input_id } => {
                self.uploads.remove(&input_id);
            }
            SessionAction::End => {
                debug!("Site session ended");
                self.uploads.clear();
                self.chat_open = false;
                self.ended = true;
            }
        }
    }
}

impl Reducible for SiteSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
