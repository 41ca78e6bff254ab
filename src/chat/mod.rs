//! Scripted site chat: a persisted message log, a reply strategy and the
//! session that ties the two together.

pub mod log;
pub mod responder;
pub mod session;

pub use self::log::ChatMessage;
pub use session::ChatSession;
