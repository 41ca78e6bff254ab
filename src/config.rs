use log::Level;

/// Storage key holding the serialized chat history.
pub const CHAT_LOG_KEY: &str = "chatLog";

/// Canned chatbot answers, picked uniformly at random.
pub const CANNED_REPLIES: [&str; 3] = [
    "Thanks for contacting us!",
    "We will get back to you shortly.",
    "Can I help with something else?",
];

pub const CHAT_REPLY_DELAY_MS: u32 = 800;

pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const REVEAL_OFFSET: f64 = 150.0;

pub const COUNTER_TICK_MS: u32 = 20;
pub const COUNTER_STEPS: u32 = 100;

pub const MAX_UPLOAD_BYTES: f64 = 5.0 * 1024.0 * 1024.0;
pub const UPLOAD_TICK_MS: u32 = 200;
pub const UPLOAD_MAX_STEP: f64 = 15.0;
pub const UPLOAD_HIDE_DELAY_MS: u32 = 500;

pub const NOTIFICATION_MS: u32 = 4_000;
pub const FORM_SUBMIT_DELAY_MS: u32 = 1_500;
pub const FORM_SUCCESS_MS: u32 = 4_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
