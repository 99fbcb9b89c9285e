use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use growth::summary::{EMPTY_SUMMARY, SummaryError, SummaryMetrics, SummaryTransport};

use super::*;
use crate::rate_limit::RateLimitConfig;
use crate::state::test_helpers::{test_app_state, test_app_state_with_summarizer};

struct MockTransport {
    reply: fn() -> Result<String, SummaryError>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    fn new(reply: fn() -> Result<String, SummaryError>) -> Arc<Self> {
        Arc::new(Self { reply, calls: Mutex::new(Vec::new()) })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SummaryTransport for MockTransport {
    async fn generate(&self, _system: &str, prompt: &str) -> Result<String, SummaryError> {
        self.calls.lock().unwrap().push(prompt.to_owned());
        (self.reply)()
    }
}

fn request() -> SummaryRequest {
    SummaryRequest {
        metrics: SummaryMetrics { traffic: 1000, conversion_rate_pct: 2.0, deal_value: 500, annual_growth: 36_000 },
        url: "https://acme.example".into(),
        active_modules: "AI Agent, Smart CRM, SEO Engine".into(),
    }
}

fn peer(last: u8) -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from((Ipv4Addr::new(192, 168, 0, last), 40_000)))
}

#[tokio::test]
async fn generated_summary_is_returned() {
    let mock = MockTransport::new(|| Ok("We will close your gap.".into()));
    let state = test_app_state_with_summarizer(mock.clone());

    let Json(response) = create_summary(State(state), peer(1), Json(request())).await;
    assert_eq!(response, SummaryResponse { summary: "We will close your gap.".into(), fallback: false });
    assert_eq!(mock.call_count(), 1);
    assert!(mock.calls.lock().unwrap()[0].contains("Projected Annual Revenue Increase: $36,000"));
}

#[tokio::test]
async fn remote_failure_is_not_an_http_error() {
    let mock = MockTransport::new(|| Err(SummaryError::Status { status: 500 }));
    let state = test_app_state_with_summarizer(mock);

    let Json(response) = create_summary(State(state), peer(1), Json(request())).await;
    assert_eq!(response.summary, FALLBACK_SUMMARY);
    assert!(response.fallback);
}

#[tokio::test]
async fn empty_remote_text_uses_boilerplate() {
    let mock = MockTransport::new(|| Err(SummaryError::MissingText));
    let state = test_app_state_with_summarizer(mock);

    let Json(response) = create_summary(State(state), peer(1), Json(request())).await;
    assert_eq!(response.summary, EMPTY_SUMMARY);
    assert!(response.fallback);
}

#[tokio::test]
async fn missing_transport_returns_fallback() {
    let Json(response) = create_summary(State(test_app_state()), peer(1), Json(request())).await;
    assert_eq!(response.summary, FALLBACK_SUMMARY);
    assert!(response.fallback);
}

#[tokio::test]
async fn rate_limited_client_gets_fallback_without_remote_call() {
    let mock = MockTransport::new(|| Ok("generated".into()));
    let mut state = test_app_state_with_summarizer(mock.clone());
    state.rate_limiter = crate::rate_limit::RateLimiter::new(RateLimitConfig {
        per_client_limit: 1,
        ..RateLimitConfig::default()
    });

    let Json(first) = create_summary(State(state.clone()), peer(7), Json(request())).await;
    assert!(!first.fallback);

    let Json(second) = create_summary(State(state.clone()), peer(7), Json(request())).await;
    assert_eq!(second.summary, FALLBACK_SUMMARY);
    assert!(second.fallback);
    assert_eq!(mock.call_count(), 1);

    let Json(other) = create_summary(State(state), peer(8), Json(request())).await;
    assert!(!other.fallback);
}

#[tokio::test]
async fn multipliers_reflect_state() {
    let mut state = test_app_state();
    state.multipliers = Multipliers::new(1.1, 1.2, 1.3).unwrap();
    let Json(served) = multipliers(State(state)).await;
    assert_eq!(served, Multipliers::new(1.1, 1.2, 1.3).unwrap());
}

#[test]
fn response_json_shape() {
    let body = serde_json::to_value(SummaryOutcome::Fallback(FALLBACK_SUMMARY).into_response()).unwrap();
    assert_eq!(body["fallback"], true);
    assert_eq!(body["summary"], FALLBACK_SUMMARY);
}
