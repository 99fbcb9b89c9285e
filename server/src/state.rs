//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no per-visitor data: it holds the optional summary transport
//! (which owns the credential), the multipliers served to the page, and the
//! summary rate limiter.

use std::sync::Arc;

use growth::Multipliers;
use growth::summary::SummaryTransport;

use crate::rate_limit::{RateLimitConfig, RateLimiter};

/// Clone is required by Axum; all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// `None` if the Gemini key is not configured; summaries use the fallback.
    pub summarizer: Option<Arc<dyn SummaryTransport>>,
    pub multipliers: Multipliers,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(
        summarizer: Option<Arc<dyn SummaryTransport>>,
        multipliers: Multipliers,
        rate_limits: RateLimitConfig,
    ) -> Self {
        Self { summarizer, multipliers, rate_limiter: RateLimiter::new(rate_limits) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
