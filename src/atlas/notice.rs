//! Self-clearing transient user notices.
//!
//! A notice lives for three seconds. Posting a new one replaces the old notice
//! and its pending clear, so a stale clear can never race a newer message: the
//! deadline is part of the current notice, not a separately scheduled callback.
//! Expiry is checked at read time, which fits the single-threaded command loop
//! (no timers, no threads).

use std::time::{Duration, Instant};

pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<(String, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice, superseding any pending one.
    pub fn post(&mut self, text: impl Into<String>) {
        self.post_at(text, Instant::now());
    }

    /// The current notice, or `None` once its deadline has passed.
    pub fn current(&self) -> Option<&str> {
        self.current_at(Instant::now())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    fn post_at(&mut self, text: impl Into<String>, now: Instant) {
        self.current = Some((text.into(), now + NOTICE_TTL));
    }

    fn current_at(&self, now: Instant) -> Option<&str> {
        match &self.current {
            Some((text, deadline)) if now < *deadline => Some(text),
            _ => None,
        }
    }
}
