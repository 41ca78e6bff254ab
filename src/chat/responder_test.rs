use std::collections::HashSet;

use super::*;

fn seeded(seed: u64) -> CannedReplies {
    CannedReplies::with_rng(StdRng::seed_from_u64(seed))
}

#[test]
fn has_exactly_three_replies() {
    assert_eq!(seeded(1).replies.len(), 3);
}

#[test]
fn respond_returns_a_canned_reply() {
    let mut replies = seeded(7);
    for _ in 0..50 {
        let reply = replies.respond("hello");
        assert!(config::CANNED_REPLIES.contains(&reply.as_str()));
        assert!(!reply.is_empty());
        assert_ne!(reply, "hello");
    }
}

#[test]
fn respond_ignores_the_message() {
    let mut a = seeded(42);
    let mut b = seeded(42);
    assert_eq!(a.respond("hello"), b.respond("what are the school hours?"));
}

#[test]
fn every_reply_shows_up_eventually() {
    let mut replies = seeded(3);
    let seen: HashSet<String> = (0..300).map(|_| replies.pick_reply()).collect();
    assert_eq!(seen.len(), 3);
}

#[test]
fn entropy_seeded_picker_works() {
    let reply = CannedReplies::new().respond("hi");
    assert!(config::CANNED_REPLIES.contains(&reply.as_str()));
}
