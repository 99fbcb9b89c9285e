//! `growthsim`: the growth simulator in a terminal.
//!
//! Subcommands share one scenario (the four slider inputs plus module
//! switches) and run it through the same projection, lead flow, and report
//! generator as the web page.

mod render;


use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use growth::summary::{self, SummaryTransport};
use growth::{
    ConfigError, FALLBACK_SUMMARY, GeminiTransport, InputMetrics, LeadError, LeadFlow, LeadForm, LeakTicker, Module,
    ModuleToggles, Multipliers, Projection, REPORT_FILE_NAME, ReportContext, SummaryConfig, SummaryOutcome,
    SummaryRequest, project, render_report,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("lead form rejected: {0}")]
    Lead(#[from] LeadError),
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("signal handler failed: {0}")]
    Signal(std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "growthsim", about = "Revenue projection, growth blueprint, and leak counter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print baseline and optimized funnels for a scenario.
    Project(ProjectArgs),
    /// Run the lead flow and write the growth blueprint report.
    Blueprint(BlueprintArgs),
    /// Show the live revenue-leak counter.
    Leak(LeakArgs),
}

/// Slider inputs and module switches. Out-of-range values are clamped.
#[derive(Args, Debug, Clone)]
struct ScenarioArgs {
    #[arg(long, default_value_t = 1000.0)]
    traffic: f64,

    #[arg(long, default_value_t = 2.0, help = "Traffic-to-lead conversion, percent")]
    conversion: f64,

    #[arg(long, default_value_t = 20.0, help = "Lead-to-sale rate, percent")]
    lead_to_sale: f64,

    #[arg(long, default_value_t = 500.0)]
    deal_value: f64,

    #[arg(long, default_value_t = false)]
    chatbot: bool,

    #[arg(long, default_value_t = false)]
    crm: bool,

    #[arg(long, default_value_t = false)]
    seo: bool,
}

impl ScenarioArgs {
    fn inputs(&self) -> InputMetrics {
        InputMetrics::clamped(self.traffic, self.conversion, self.lead_to_sale, self.deal_value)
    }

    fn toggles(&self) -> ModuleToggles {
        let mut toggles = ModuleToggles::default();
        toggles.set(Module::Chatbot, self.chatbot);
        toggles.set(Module::Crm, self.crm);
        toggles.set(Module::Seo, self.seo);
        toggles
    }

    fn projection(&self, multipliers: &Multipliers) -> Projection {
        project(&self.inputs(), &self.toggles(), multipliers)
    }
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    #[arg(long, default_value_t = false, help = "Print the projection as JSON")]
    json: bool,
}

#[derive(Args, Debug)]
struct BlueprintArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    #[arg(long)]
    url: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    phone: String,

    #[arg(long, default_value = ".", help = "Directory the report is written to")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct LeakArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    #[arg(long, help = "Stop after this many seconds instead of waiting for Ctrl-C")]
    seconds: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let multipliers = Multipliers::from_env()?;

    match cli.command {
        Command::Project(args) => run_project(&args, &multipliers),
        Command::Blueprint(args) => run_blueprint(&args, &multipliers).await,
        Command::Leak(args) => run_leak(&args, &multipliers).await,
    }
}

fn run_project(args: &ProjectArgs, multipliers: &Multipliers) -> Result<(), CliError> {
    let projection = args.scenario.projection(multipliers);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        print!("{}", render::render_projection(&projection, &args.scenario.toggles(), multipliers));
    }
    Ok(())
}

async fn run_blueprint(args: &BlueprintArgs, multipliers: &Multipliers) -> Result<(), CliError> {
    let transport = summary_transport();
    let ctx = blueprint(
        args,
        multipliers,
        transport.as_ref().map(|t| t as &dyn SummaryTransport),
        time::OffsetDateTime::now_utc().date(),
    )
    .await?;
    let path = write_report(&args.out, &ctx)?;
    println!("{}", path.display());
    Ok(())
}

/// Walk the lead flow once: validate the form, fetch the summary, settle.
async fn blueprint(
    args: &BlueprintArgs,
    multipliers: &Multipliers,
    transport: Option<&dyn SummaryTransport>,
    date: time::Date,
) -> Result<ReportContext, CliError> {
    let inputs = args.scenario.inputs();
    let toggles = args.scenario.toggles();
    let projection = project(&inputs, &toggles, multipliers);

    let mut flow = LeadFlow::default();
    flow.form = LeadForm { url: args.url.clone(), email: args.email.clone(), phone: args.phone.clone() };
    flow.open();
    let ticket = flow.submit()?;

    let request = SummaryRequest::new(&inputs, &toggles, &projection, &flow.form.url);
    let outcome = match transport {
        Some(transport) => summary::summarize(transport, &request).await,
        None => SummaryOutcome::Fallback(FALLBACK_SUMMARY),
    };
    if outcome.is_fallback() {
        warn!("blueprint uses the fallback summary");
    }
    flow.settle(ticket, outcome.text());

    Ok(ReportContext {
        projection,
        toggles,
        summary: flow.summary().unwrap_or(FALLBACK_SUMMARY).to_owned(),
        lead: flow.form,
        date,
    })
}

fn write_report(out: &Path, ctx: &ReportContext) -> Result<PathBuf, CliError> {
    std::fs::create_dir_all(out).map_err(|source| CliError::Write { path: out.to_path_buf(), source })?;
    let path = out.join(REPORT_FILE_NAME);
    std::fs::write(&path, render_report(ctx)).map_err(|source| CliError::Write { path: path.clone(), source })?;
    info!(path = %path.display(), "blueprint written");
    Ok(path)
}

fn summary_transport() -> Option<GeminiTransport> {
    let config = match SummaryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "summary client not configured");
            return None;
        }
    };
    match GeminiTransport::new(config) {
        Ok(transport) => Some(transport),
        Err(e) => {
            warn!(error = %e, "summary client unavailable");
            None
        }
    }
}

async fn run_leak(args: &LeakArgs, multipliers: &Multipliers) -> Result<(), CliError> {
    let projection = args.scenario.projection(multipliers);
    let Some(ticker) = LeakTicker::start(projection.annual_growth) else {
        println!("No projected growth; nothing is leaking. Enable a module with --chatbot, --crm, or --seo.");
        return Ok(());
    };

    let mut rx = ticker.subscribe();
    let deadline = async {
        match args.seconds {
            Some(seconds) => tokio::time::sleep(Duration::from_secs(seconds)).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let line = render::render_leak_line(&rx.borrow_and_update());
                eprint!("\r{line}");
            }
            signal = tokio::signal::ctrl_c() => {
                signal.map_err(CliError::Signal)?;
                break;
            }
            () = &mut deadline => break,
        }
    }

    let last = ticker.meter();
    drop(ticker);
    eprintln!();
    println!("{}", render::render_leak_line(&last));
    Ok(())
}
