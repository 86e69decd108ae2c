//! In-memory rate limiting for lesson generation.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<Uuid, VecDeque<Instant>>`.
//! Two limits enforced:
//! - Per-user: 5 generations/min
//! - Global: 30 provider calls/min
//!
//! Plan credits cap totals per month; this limiter only smooths bursts, so
//! windows are short and counters are never persisted.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use uuid::Uuid;

const DEFAULT_PER_USER_LIMIT: usize = 5;
const DEFAULT_PER_USER_WINDOW_SECS: u64 = 60;

const DEFAULT_GLOBAL_LIMIT: usize = 30;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub per_user_limit: usize,
    pub per_user_window: Duration,
    pub global_limit: usize,
    pub global_window: Duration,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        Self {
            per_user_limit: env_parse("GENERATE_RATE_PER_USER", DEFAULT_PER_USER_LIMIT),
            per_user_window: Duration::from_secs(env_parse(
                "GENERATE_RATE_PER_USER_WINDOW_SECS",
                DEFAULT_PER_USER_WINDOW_SECS,
            )),
            global_limit: env_parse("GENERATE_RATE_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(env_parse(
                "GENERATE_RATE_GLOBAL_WINDOW_SECS",
                DEFAULT_GLOBAL_WINDOW_SECS,
            )),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[derive(Debug, thiserror::Error)]
#[error("rate limit exceeded")]
pub struct RateLimitExceeded;

struct Inner {
    per_user: HashMap<Uuid, VecDeque<Instant>>,
    global: VecDeque<Instant>,
}

/// Shared sliding-window limiter. Clone is cheap; all clones share state.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<Inner>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RateLimitConfig::from_env())
    }

    #[must_use]
    pub fn with_config(config: RateLimitConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { per_user: HashMap::new(), global: VecDeque::new() })),
            config,
        }
    }

    /// Admit one request for `user`, recording it on success.
    pub fn check_and_record(&self, user: Uuid) -> Result<(), RateLimitExceeded> {
        self.check_at(user, Instant::now())
    }

    fn check_at(&self, user: Uuid, now: Instant) -> Result<(), RateLimitExceeded> {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        prune(&mut inner.global, now, self.config.global_window);
        if inner.global.len() >= self.config.global_limit {
            return Err(RateLimitExceeded);
        }

        let window = self.config.per_user_window;
        let user_hits = inner.per_user.entry(user).or_default();
        prune(user_hits, now, window);
        if user_hits.len() >= self.config.per_user_limit {
            return Err(RateLimitExceeded);
        }

        user_hits.push_back(now);
        inner.global.push_back(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

fn prune(hits: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(front) = hits.front() {
        if now.duration_since(*front) >= window {
            hits.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
