#[cfg(test)]
#[path = "responder_test.rs"]
mod responder_test;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config;

/// Produces the bot's next line. Takes no context, so a real backend can
/// replace the canned list without touching the chat log.
pub trait ReplyStrategy {
    fn pick_reply(&mut self) -> String;

    /// Answers a visitor message. The message content is not consulted.
    fn respond(&mut self, _user_message: &str) -> String {
        self.pick_reply()
    }
}

/// Uniform pick from the fixed reply list.
pub struct CannedReplies {
    replies: Vec<String>,
    rng: StdRng,
}

impl CannedReplies {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            replies: config::CANNED_REPLIES.iter().map(|r| r.to_string()).collect(),
            rng,
        }
    }
}

impl Default for CannedReplies {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyStrategy for CannedReplies {
    fn pick_reply(&mut self) -> String {
        self.replies
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| config::CANNED_REPLIES[0].to_string())
    }
}
