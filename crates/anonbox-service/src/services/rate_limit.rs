//! Per-client submission rate limiting
//!
//! A fixed-window counter keyed by client identity: at most `max_requests`
//! accepted submissions per window, counters kept in-process. Suitable for
//! a single-instance deployment; expired windows are reset on next touch
//! and can be pruned in bulk.

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Outcome of a rate-limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// Request admitted; header values for the current window
    Allowed {
        limit: u32,
        remaining: u32,
        reset_secs: u64,
    },
    /// Request rejected until the window rolls over
    Limited { limit: u32, retry_after_secs: u64 },
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window rate limiter keyed by client identity
#[derive(Debug)]
pub struct FixedWindowLimiter {
    max_requests: u32,
    window: Duration,
    windows: DashMap<String, Window>,
}

impl FixedWindowLimiter {
    /// Create a limiter admitting `max_requests` per `window` per key
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: DashMap::new(),
        }
    }

    /// Record one request for `key` and decide whether to admit it
    pub fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        let mut entry = self
            .windows
            .entry(key.to_string())
            .or_insert(Window { started: now, count: 0 });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count < self.max_requests {
            entry.count += 1;
            let elapsed = now.duration_since(entry.started);
            RateDecision::Allowed {
                limit: self.max_requests,
                remaining: self.max_requests - entry.count,
                reset_secs: self.window.saturating_sub(elapsed).as_secs(),
            }
        } else {
            RateDecision::Limited {
                limit: self.max_requests,
                retry_after_secs: self.window.as_secs(),
            }
        }
    }

    /// Drop windows that have fully elapsed
    pub fn prune_expired(&self) {
        let window = self.window;
        self.windows
            .retain(|_, w| w.started.elapsed() < window);
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.windows.len()
    }
}
