//! Summary and multiplier requests against the hosting server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): no request is made; callers get the fallback.
//!
//! ERROR HANDLING
//! ==============
//! The lead flow must reach its ready state whatever happens, so
//! [`request_summary`] returns text, never an error. Failures are logged to
//! the browser console and replaced with the fixed fallback narrative.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use growth::summary::{FALLBACK_SUMMARY, SummaryRequest, SummaryResponse};
#[cfg(feature = "hydrate")]
use growth::Multipliers;

pub const SUMMARY_ENDPOINT: &str = "/api/summary";
pub const MULTIPLIERS_ENDPOINT: &str = "/api/multipliers";

/// Text to show for a settled request: the server's summary, or the
/// fallback when the request itself failed.
fn summary_text(result: Result<SummaryResponse, String>) -> String {
    match result {
        Ok(response) => response.summary,
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("summary request failed: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            FALLBACK_SUMMARY.to_owned()
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn summary_failed_message(status: u16) -> String {
    format!("summary request failed: {status}")
}

/// Ask the server for an executive summary. Never fails.
pub async fn request_summary(request: &SummaryRequest) -> String {
    #[cfg(feature = "hydrate")]
    {
        summary_text(post_summary(request).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        summary_text(Err("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn post_summary(request: &SummaryRequest) -> Result<SummaryResponse, String> {
    let resp = gloo_net::http::Request::post(SUMMARY_ENDPOINT)
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(summary_failed_message(resp.status()));
    }
    resp.json::<SummaryResponse>().await.map_err(|e| e.to_string())
}

/// Multipliers configured on the server, or `None` to keep the defaults.
#[cfg(feature = "hydrate")]
pub async fn fetch_multipliers() -> Option<Multipliers> {
    let resp = gloo_net::http::Request::get(MULTIPLIERS_ENDPOINT).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<Multipliers>().await.ok()
}
