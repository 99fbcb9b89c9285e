//! Remote summary client: one generative-text call per lead submission.
//!
//! DESIGN
//! ======
//! The caller always gets text back. Transport errors, non-success statuses,
//! and malformed payloads are logged and replaced by a fixed narrative inside
//! [`summarize`], so the lead flow never has an error branch to handle.
//! There are no retries and no timeout override; the transport's defaults
//! apply.
//!
//! The HTTP transport sits behind [`SummaryTransport`] so tests and hosts
//! without network access can substitute their own.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::format;
use crate::metrics::InputMetrics;
use crate::modules::ModuleToggles;
use crate::projection::Projection;

/// Persona and task given to the model as its system instruction.
pub const SYSTEM_INSTRUCTION: &str = "You are a Senior Growth Engineer at Frayze.ca. Your job is to analyze business \
metrics and write a concise, high-impact Executive Summary for a PDF report. Focus on the 'Opportunity Cost' and how \
Frayze's automation (Chatbots, CRM, SEO) solves specific bottlenecks. Tone: Professional, Technical, Persuasive.";

/// Narrative used whenever the remote call fails.
pub const FALLBACK_SUMMARY: &str = "Our automated analysis indicates significant revenue leakage in your current \
funnel. Implementing the selected Frayze modules is projected to close the gap between your current baseline and \
your market potential.";

/// Narrative used when the service answers but returns no text.
pub const EMPTY_SUMMARY: &str = "Analysis generation failed. Standard boilerplate used.";

// =============================================================================
// ERROR
// =============================================================================

/// Failure modes of one summary call. Absorbed by [`summarize`].
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request could not be sent or the body could not be read.
    #[error("summary request failed: {0}")]
    Request(String),

    /// The service returned a non-success status.
    #[error("summary response error: status {status}")]
    Status { status: u16 },

    /// The response body is not the expected JSON.
    #[error("summary response parse failed: {0}")]
    Parse(String),

    /// The response parsed but carried no text.
    #[error("summary response contained no text")]
    MissingText,
}

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// Figures quoted to the model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub traffic: u32,
    pub conversion_rate_pct: f64,
    pub deal_value: u32,
    pub annual_growth: i64,
}

/// Everything needed for one summary. Also the body of `POST /api/summary`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub metrics: SummaryMetrics,
    /// Website submitted in the lead form.
    pub url: String,
    /// Human-readable active modules, e.g. `AI Agent, Smart CRM`.
    pub active_modules: String,
}

impl SummaryRequest {
    /// Snapshot the current simulator state for a submission.
    #[must_use]
    pub fn new(inputs: &InputMetrics, toggles: &ModuleToggles, projection: &Projection, url: &str) -> Self {
        Self {
            metrics: SummaryMetrics {
                traffic: inputs.monthly_traffic,
                conversion_rate_pct: inputs.conversion_rate_pct,
                deal_value: inputs.avg_deal_value,
                annual_growth: projection.annual_growth,
            },
            url: url.to_owned(),
            active_modules: toggles.active_label(),
        }
    }
}

/// Body returned by `POST /api/summary`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    /// True when `summary` is one of the fixed fallback narratives.
    pub fallback: bool,
}

/// Result of [`summarize`]: generated text or a fixed fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummaryOutcome {
    Generated(String),
    Fallback(&'static str),
}

impl SummaryOutcome {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) => text.as_str(),
            Self::Fallback(text) => *text,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    #[must_use]
    pub fn into_response(self) -> SummaryResponse {
        let fallback = self.is_fallback();
        let summary = match self {
            Self::Generated(text) => text,
            Self::Fallback(text) => text.to_owned(),
        };
        SummaryResponse { summary, fallback }
    }
}

// =============================================================================
// PROMPT
// =============================================================================

/// User prompt quoting the submitted metrics.
#[must_use]
pub fn build_user_prompt(request: &SummaryRequest) -> String {
    let website = if request.url.trim().is_empty() { "Not provided" } else { request.url.as_str() };
    let m = &request.metrics;
    format!(
        "Analyze this business:\n\
         Website: {website}\n\
         Current Traffic: {traffic}/mo\n\
         Current Conversion: {conversion}%\n\
         Avg Deal Value: ${deal}\n\
         \n\
         Simulated Growth with Frayze:\n\
         Active Modules: {modules}\n\
         Projected Annual Revenue Increase: {growth}\n\
         \n\
         Write a 3-4 sentence Executive Summary explaining specifically why this business needs to implement \
         these systems immediately to capture that revenue. Use \"We\" to refer to Frayze.",
        traffic = m.traffic,
        conversion = m.conversion_rate_pct,
        deal = m.deal_value,
        modules = request.active_modules,
        growth = format::dollars(m.annual_growth),
    )
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    contents: [WireContent<'a>; 1],
    #[serde(rename = "systemInstruction")]
    system_instruction: WireContent<'a>,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    parts: [WirePart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub(crate) fn new(system: &'a str, prompt: &'a str) -> Self {
        Self {
            contents: [WireContent { parts: [WirePart { text: prompt }] }],
            system_instruction: WireContent { parts: [WirePart { text: system }] },
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Extract `candidates[0].content.parts[0].text` from a response body.
pub(crate) fn parse_response(json: &str) -> Result<String, SummaryError> {
    let response: GenerateResponse = serde_json::from_str(json).map_err(|e| SummaryError::Parse(e.to_string()))?;
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|text| !text.is_empty())
        .ok_or(SummaryError::MissingText)
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// One request/response exchange with a generative-text service.
#[async_trait::async_trait]
pub trait SummaryTransport: Send + Sync {
    /// Send `system` and `prompt`; return the generated text.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, SummaryError>;
}

/// Generate an executive summary, falling back to fixed text on any failure.
pub async fn summarize(transport: &dyn SummaryTransport, request: &SummaryRequest) -> SummaryOutcome {
    let prompt = build_user_prompt(request);
    match transport.generate(SYSTEM_INSTRUCTION, &prompt).await {
        Ok(text) => {
            debug!(chars = text.len(), "summary generated");
            SummaryOutcome::Generated(text)
        }
        Err(SummaryError::MissingText) => {
            warn!("summary response had no text; using boilerplate");
            SummaryOutcome::Fallback(EMPTY_SUMMARY)
        }
        Err(e) => {
            warn!(error = %e, "summary generation failed; using fallback");
            SummaryOutcome::Fallback(FALLBACK_SUMMARY)
        }
    }
}

#[cfg(feature = "native")]
pub use gemini::GeminiTransport;

#[cfg(feature = "native")]
mod gemini {
    use super::{GenerateRequest, SummaryError, SummaryTransport, parse_response};
    use crate::config::SummaryConfig;

    /// Gemini `generateContent` over reqwest.
    ///
    /// The key travels in the `x-goog-api-key` header so it never appears in
    /// a URL, and therefore never in a logged request error.
    pub struct GeminiTransport {
        http: reqwest::Client,
        endpoint: String,
        api_key: String,
    }

    impl GeminiTransport {
        /// # Errors
        ///
        /// Returns [`SummaryError::HttpClientBuild`] if the HTTP client fails to build.
        pub fn new(config: SummaryConfig) -> Result<Self, SummaryError> {
            let http = reqwest::Client::builder()
                .build()
                .map_err(|e| SummaryError::HttpClientBuild(e.to_string()))?;
            Ok(Self { http, endpoint: config.endpoint(), api_key: config.api_key })
        }
    }

    #[async_trait::async_trait]
    impl SummaryTransport for GeminiTransport {
        async fn generate(&self, system: &str, prompt: &str) -> Result<String, SummaryError> {
            let body = GenerateRequest::new(system, prompt);

            let response = self
                .http
                .post(&self.endpoint)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| SummaryError::Request(e.without_url().to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(SummaryError::Status { status: status.as_u16() });
            }

            let text = response
                .text()
                .await
                .map_err(|e| SummaryError::Request(e.without_url().to_string()))?;
            parse_response(&text)
        }
    }
}
