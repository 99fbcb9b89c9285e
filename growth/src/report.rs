//! Downloadable "Growth Blueprint" report.
//!
//! DESIGN
//! ======
//! [`render_report`] is a pure function from a [`ReportContext`] snapshot to a
//! self-contained HTML document (inline CSS, no scripts, no external assets).
//! The only non-deterministic input, the generation date, is part of the
//! snapshot so the output is reproducible in tests.
//!
//! User-supplied text is escaped. Figures come from [`format::dollars`] and
//! contain only digits, `$`, `,`, and `-`, none of which need escaping, so
//! the headline growth figure always appears verbatim.
//!
//! The report has no access to configuration and therefore cannot leak the
//! summary credential.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt::Write;

use time::Date;

use crate::format;
use crate::lead::LeadForm;
use crate::modules::ModuleToggles;
use crate::projection::Projection;

/// File name offered for download.
pub const REPORT_FILE_NAME: &str = "Frayze_Growth_Blueprint.html";

/// MIME type of the downloaded file.
pub const REPORT_CONTENT_TYPE: &str = "text/html";

/// Booking link in the closing call to action.
pub const BOOKING_URL: &str = "https://frayze.ca/book-consultation/";

/// Everything the report shows, captured at download time.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportContext {
    pub projection: Projection,
    pub toggles: ModuleToggles,
    pub lead: LeadForm,
    pub summary: String,
    pub date: Date,
}

// =============================================================================
// CHECKLIST
// =============================================================================

/// Status label of one checklist row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GapStatus {
    Included,
    Missing,
    Recommended,
    Core,
}

impl GapStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Included => "INCLUDED",
            Self::Missing => "MISSING",
            Self::Recommended => "RECOMMENDED",
            Self::Core => "CORE",
        }
    }

    /// Included and core rows are highlighted.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Included | Self::Core)
    }
}

/// One row of the technical gap analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GapRow {
    pub name: &'static str,
    pub detail: &'static str,
    pub status: GapStatus,
}

fn toggled(active: bool, otherwise: GapStatus) -> GapStatus {
    if active { GapStatus::Included } else { otherwise }
}

/// The six checklist rows, in display order.
#[must_use]
pub fn gap_analysis(toggles: &ModuleToggles) -> [GapRow; 6] {
    [
        GapRow {
            name: "Speed to Lead (Instant Response)",
            detail: "Eliminate the 5-minute drop-off window.",
            status: toggled(toggles.chatbot, GapStatus::Missing),
        },
        GapRow {
            name: "AI Omnichannel Unification",
            detail: "SMS, Email, IG, FB - One inbox, zero leaks.",
            status: GapStatus::Core,
        },
        GapRow {
            name: "Reputation Management",
            detail: "Automated review requests to dominate local SEO.",
            status: toggled(toggles.seo, GapStatus::Recommended),
        },
        GapRow {
            name: "Autonomous Follow-Up",
            detail: "System nurtures leads for 12 months without human input.",
            status: toggled(toggles.crm, GapStatus::Missing),
        },
        GapRow {
            name: "Activity Stats & Accountability",
            detail: "Transparent dashboards for employee performance.",
            status: GapStatus::Core,
        },
        GapRow {
            name: "24/7 AI Receptionist",
            detail: "Capture leads while you sleep.",
            status: GapStatus::Core,
        },
    ]
}

// =============================================================================
// RENDER
// =============================================================================

/// Escape text for an HTML text node or a quoted attribute.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `M/D/YYYY`, no padding.
#[must_use]
pub fn report_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

/// Render the full report document.
#[must_use]
pub fn render_report(ctx: &ReportContext) -> String {
    let url = escape_html(&ctx.lead.url);
    let phone = escape_html(&ctx.lead.phone);
    let summary = escape_html(&ctx.summary);
    let modules = escape_html(&ctx.toggles.active_label());
    let date = report_date(ctx.date);
    let year = ctx.date.year();
    let growth = format::dollars(ctx.projection.annual_growth);
    let base_revenue = format::dollars(to_signed(ctx.projection.baseline.revenue));
    let new_revenue = format::dollars(to_signed(ctx.projection.optimized.revenue));

    let mut checklist = String::new();
    for row in gap_analysis(&ctx.toggles) {
        let class = if row.status.is_active() { "audit-item active" } else { "audit-item" };
        let _ = write!(
            checklist,
            r#"
            <li class="{class}">
                <div>
                    <div class="audit-name">{name}</div>
                    <div class="audit-detail">{detail}</div>
                </div>
                <div class="audit-status">{status}</div>
            </li>"#,
            name = escape_html(row.name),
            detail = row.detail,
            status = row.status.label(),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Frayze Growth Blueprint</title>
    <style>{REPORT_STYLE}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div class="logo">frayze<span>.ca</span></div>
            <div class="badge">Growth Architecture Report</div>
        </div>

        <h1>System Blueprint</h1>
        <p class="muted">Prepared for: <span class="prepared-for">{url}</span> | Date: {date}</p>

        <div class="growth-box">
            <div class="growth-title">Total Revenue Opportunity</div>
            <div class="growth-value">{growth} <span class="growth-unit">/ yr</span></div>
            <p class="growth-note">Identified via Compound Growth Analysis</p>
        </div>

        <div class="ai-box">
            <div class="ai-label">&#10024; GENERATED EXECUTIVE SUMMARY</div>
            <p class="ai-text">"{summary}"</p>
        </div>

        <div class="grid">
            <div class="card">
                <div class="metric-label">Current Monthly Revenue</div>
                <div class="metric-value">{base_revenue}</div>
                <div class="metric-sub">Based on user input</div>
            </div>
            <div class="card card-optimized">
                <div class="metric-label">Optimized Monthly Revenue</div>
                <div class="metric-value metric-highlight">{new_revenue}</div>
                <div class="metric-sub">With Frayze Stack: {modules}</div>
            </div>
        </div>

        <h2>Technical Gap Analysis</h2>
        <p class="muted small">We've identified the following critical infrastructure components missing from your current growth model:</p>

        <ul class="audit-list">{checklist}
        </ul>

        <div class="closing">
            <p>Our engineering team has received this snapshot.</p>
            <p>We will contact you at <strong>{phone}</strong> to verify these numbers.</p>
            <a href="{BOOKING_URL}" class="cta-btn">Book Deployment Call</a>
        </div>

        <div class="footer">
            &copy; {year} Frayze Technologies Inc. | Engineered for Growth
        </div>
    </div>
</body>
</html>
"#
    )
}

#[allow(clippy::cast_possible_wrap)]
fn to_signed(value: u64) -> i64 {
    value as i64
}

const REPORT_STYLE: &str = r"
        body { font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; background-color: #f8fafc; color: #1e293b; margin: 0; padding: 0; line-height: 1.6; }
        .container { max-width: 800px; margin: 0 auto; padding: 40px 20px; background: #fff; min-height: 100vh; box-shadow: 0 0 20px rgba(0,0,0,0.05); }
        .header { border-bottom: 2px solid #e2e8f0; padding-bottom: 20px; margin-bottom: 40px; display: flex; justify-content: space-between; align-items: flex-end; }
        .logo { font-size: 24px; font-weight: 800; color: #0f172a; }
        .logo span { color: #0891b2; }
        .badge { background: #f1f5f9; border: 1px solid #cbd5e1; padding: 5px 10px; font-size: 12px; color: #64748b; border-radius: 4px; text-transform: uppercase; letter-spacing: 1px; font-weight: 600; }
        h1 { color: #0f172a; font-size: 32px; margin-bottom: 10px; letter-spacing: -1px; }
        h2 { color: #0891b2; font-size: 18px; text-transform: uppercase; letter-spacing: 2px; margin-top: 40px; border-bottom: 1px solid #e2e8f0; padding-bottom: 10px; }
        .muted { color: #64748b; }
        .small { font-size: 14px; margin-bottom: 20px; }
        .prepared-for { color: #0f172a; font-weight: bold; }
        .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-bottom: 30px; }
        .card { background: #fff; padding: 25px; border-radius: 12px; border: 1px solid #e2e8f0; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.05); }
        .card-optimized { border-color: #06b6d4; }
        .metric-label { font-size: 11px; text-transform: uppercase; color: #64748b; letter-spacing: 1px; font-weight: 700; }
        .metric-value { font-size: 28px; font-weight: 800; color: #0f172a; margin-top: 5px; }
        .metric-highlight { color: #0891b2; }
        .metric-sub { font-size: 12px; color: #059669; margin-top: 5px; font-weight: 500; }
        .growth-box { background: linear-gradient(135deg, #0f172a 0%, #1e293b 100%); color: white; padding: 30px; text-align: center; border-radius: 16px; margin: 40px 0; }
        .growth-title { font-size: 14px; text-transform: uppercase; color: #94a3b8; letter-spacing: 2px; margin-bottom: 10px; font-weight: 600; }
        .growth-value { font-size: 48px; font-weight: 800; color: #fff; }
        .growth-unit { font-size: 16px; color: #94a3b8; vertical-align: middle; }
        .growth-note { color: #cbd5e1; font-size: 14px; margin-top: 10px; }
        .ai-box { background: #ecfeff; border: 1px dashed #06b6d4; padding: 25px; border-radius: 12px; margin-bottom: 30px; position: relative; }
        .ai-label { position: absolute; top: -12px; left: 20px; background: #fff; padding: 2px 10px; color: #0891b2; font-size: 11px; font-weight: 800; border: 1px solid #06b6d4; border-radius: 20px; text-transform: uppercase; }
        .ai-text { font-style: italic; color: #334155; font-size: 15px; }
        .audit-list { list-style: none; padding: 0; }
        .audit-item { background: #fff; border: 1px solid #e2e8f0; border-left: 4px solid #94a3b8; padding: 15px; margin-bottom: 10px; display: flex; justify-content: space-between; align-items: center; border-radius: 6px; }
        .audit-item.active { border-left-color: #06b6d4; background: #f0f9ff; border-color: #bae6fd; }
        .audit-name { font-weight: 700; color: #334155; }
        .audit-detail { font-size: 12px; color: #64748b; }
        .audit-status { font-size: 11px; padding: 4px 8px; border-radius: 4px; background: #f1f5f9; color: #64748b; font-weight: 600; text-transform: uppercase; }
        .audit-item.active .audit-status { background: #06b6d4; color: #fff; }
        .closing { text-align: center; margin-top: 50px; color: #334155; }
        .footer { text-align: center; font-size: 12px; color: #94a3b8; margin-top: 60px; border-top: 1px solid #e2e8f0; padding-top: 20px; }
        .cta-btn { display: inline-block; background: #0891b2; color: #fff; padding: 15px 35px; text-decoration: none; font-weight: 700; border-radius: 8px; margin-top: 20px; text-transform: uppercase; letter-spacing: 1px; }
    ";
