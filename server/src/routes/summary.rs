//! Executive-summary and simulator-config routes.
//!
//! `POST /api/summary` always answers 200 with text. Missing configuration,
//! rate limiting, and remote failures all produce the fallback narrative
//! flagged with `fallback: true`.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::response::Json;
use growth::summary::{self, FALLBACK_SUMMARY, SummaryOutcome, SummaryRequest, SummaryResponse};
use growth::Multipliers;
use tracing::{info, warn};

use crate::state::AppState;

/// `POST /api/summary`: generate the executive summary for a lead.
pub async fn create_summary(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<SummaryRequest>,
) -> Json<SummaryResponse> {
    let fallback = || Json(SummaryOutcome::Fallback(FALLBACK_SUMMARY).into_response());

    if let Err(e) = state.rate_limiter.check_and_record(addr.ip()) {
        warn!(client = %addr.ip(), error = %e, "summary rate limited; using fallback");
        return fallback();
    }

    let Some(transport) = state.summarizer.as_deref() else {
        info!("summary transport not configured; using fallback");
        return fallback();
    };

    let outcome = summary::summarize(transport, &request).await;
    info!(
        modules = %request.active_modules,
        annual_growth = request.metrics.annual_growth,
        fallback = outcome.is_fallback(),
        "summary served"
    );
    Json(outcome.into_response())
}

/// `GET /api/multipliers`: module multipliers the page projects with.
pub async fn multipliers(State(state): State<AppState>) -> Json<Multipliers> {
    Json(state.multipliers)
}
