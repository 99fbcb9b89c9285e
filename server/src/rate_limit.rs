//! In-memory rate limiting for summary requests.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<IpAddr, VecDeque<Instant>>`.
//! Every summary spends the server's generative-text quota, so two limits
//! are enforced before the remote call:
//! - Per-client: 5 summaries/min
//! - Global: 60 summaries/min
//!
//! A limited request still gets an answer (the fallback narrative); the
//! limiter only decides whether the remote service is contacted.

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const DEFAULT_PER_CLIENT_LIMIT: usize = 5;
const DEFAULT_GLOBAL_LIMIT: usize = 60;
const DEFAULT_WINDOW_SECS: u64 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub global_limit: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_client_limit: DEFAULT_PER_CLIENT_LIMIT,
            global_limit: DEFAULT_GLOBAL_LIMIT,
            window: Duration::from_secs(DEFAULT_WINDOW_SECS),
        }
    }
}

impl RateLimitConfig {
    /// Read `SUMMARY_RATE_LIMIT_*` overrides; unparseable values keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            per_client_limit: env_parse("SUMMARY_RATE_LIMIT_PER_CLIENT", DEFAULT_PER_CLIENT_LIMIT),
            global_limit: env_parse("SUMMARY_RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            window: Duration::from_secs(env_parse("SUMMARY_RATE_LIMIT_WINDOW_SECS", DEFAULT_WINDOW_SECS)),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-client rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerClientExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    client_requests: HashMap<IpAddr, VecDeque<Instant>>,
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns the first limit that would be exceeded; nothing is recorded.
    pub fn check_and_record(&self, client: IpAddr) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    fn check_and_record_at(&self, client: IpAddr, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;
        let window_secs = cfg.window.as_secs();

        prune_window(&mut inner.global_requests, now, cfg.window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded { limit: cfg.global_limit, window_secs });
        }

        let client_deque = inner.client_requests.entry(client).or_default();
        prune_window(client_deque, now, cfg.window);
        if client_deque.len() >= cfg.per_client_limit {
            return Err(RateLimitError::PerClientExceeded { limit: cfg.per_client_limit, window_secs });
        }

        client_deque.push_back(now);
        inner.global_requests.push_back(now);
        inner
            .client_requests
            .retain(|_, deque| deque.back().is_some_and(|&last| now.duration_since(last) <= cfg.window));
        Ok(())
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
