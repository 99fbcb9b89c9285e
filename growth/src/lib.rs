//! Shared growth-simulator domain used by `client`, `server`, and `cli`.
//!
//! This crate owns everything that is not presentation: the slider-backed
//! input state, the module toggles, the funnel projection, the downloadable
//! blueprint report, the lead capture state machine, and the remote summary
//! client. Everything except the `native` transport and ticker compiles to
//! WASM so the browser runs the same arithmetic as the terminal.

pub mod chart;
pub mod config;
pub mod format;
pub mod lead;
pub mod leak;
pub mod metrics;
pub mod modules;
pub mod presentation;
pub mod projection;
pub mod report;
pub mod summary;
pub mod terminal;

pub use config::{ConfigError, SummaryConfig};
pub use lead::{LeadError, LeadFlow, LeadForm, LeadPhase, SubmitTicket};
pub use leak::LeakMeter;
pub use metrics::{InputError, InputMetrics, MetricField};
pub use modules::{GrowthScore, Module, ModuleToggles};
pub use presentation::Presentation;
pub use projection::{Funnel, Multipliers, Projection, project};
pub use report::{REPORT_CONTENT_TYPE, REPORT_FILE_NAME, ReportContext, render_report};
pub use summary::{FALLBACK_SUMMARY, SummaryMetrics, SummaryOutcome, SummaryRequest, SummaryResponse};
pub use terminal::{LogLevel, TerminalLog};

#[cfg(feature = "native")]
pub use leak::LeakTicker;
#[cfg(feature = "native")]
pub use summary::GeminiTransport;
