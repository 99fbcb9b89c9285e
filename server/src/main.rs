//! Growth simulator web server.
//!
//! Serves the server-rendered simulator page and the summary endpoint. The
//! Gemini key is read here and never leaves this process.

#![recursion_limit = "256"]

mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use growth::summary::SummaryTransport;
use growth::{GeminiTransport, Multipliers, SummaryConfig};
use tracing_subscriber::EnvFilter;

use crate::rate_limit::RateLimitConfig;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse::<u16>().map_err(|e| format!("invalid PORT {raw:?}: {e}"))?,
        Err(_) => DEFAULT_PORT,
    };

    // Malformed multipliers are fatal; a missing key is not.
    let multipliers = Multipliers::from_env()?;
    let summarizer = summary_transport();

    let state = state::AppState::new(summarizer, multipliers, RateLimitConfig::from_env());
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;
    tracing::info!(%port, "growth simulator listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}

fn summary_transport() -> Option<Arc<dyn SummaryTransport>> {
    let config = match SummaryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "summary client not configured; summaries use the fallback");
            return None;
        }
    };
    let model = config.model.clone();
    match GeminiTransport::new(config) {
        Ok(transport) => {
            tracing::info!(%model, "summary client initialized");
            Some(Arc::new(transport))
        }
        Err(e) => {
            tracing::warn!(error = %e, "summary client unavailable; summaries use the fallback");
            None
        }
    }
}
