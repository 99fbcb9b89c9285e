//! Plain-text rendering for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use growth::format;
use growth::{LeakMeter, ModuleToggles, Multipliers, Projection};

/// Side-by-side baseline and optimized funnel, then the growth totals.
#[must_use]
pub fn render_projection(projection: &Projection, toggles: &ModuleToggles, multipliers: &Multipliers) -> String {
    let base = &projection.baseline;
    let opt = &projection.optimized;
    let rows = [
        ("Traffic", format::grouped(base.traffic), format::grouped(opt.traffic)),
        ("Traffic-to-lead", format::percent_1(base.conversion_rate_pct), format::percent_1(opt.conversion_rate_pct)),
        ("Leads", format::grouped(base.leads), format::grouped(opt.leads)),
        ("Lead-to-sale", format::percent_1(base.lead_to_sale_rate_pct), format::percent_1(opt.lead_to_sale_rate_pct)),
        ("Sales", format::grouped(base.sales), format::grouped(opt.sales)),
        ("Revenue / mo", format::thousands_k(base.revenue), format::thousands_k(opt.revenue)),
    ];

    let mut out = format!("{:<16}{:>12}{:>12}\n", "", "BASELINE", "OPTIMIZED");
    for (label, before, after) in rows {
        let _ = writeln!(out, "{label:<16}{before:>12}{after:>12}");
    }

    let _ = writeln!(out, "\nActive modules: {}", toggles.active_label());
    for module in toggles.active() {
        let _ = writeln!(out, "  {:<12} +{}%", module.label(), multipliers.efficiency_pct(module));
    }

    let _ = writeln!(out, "\nMonthly growth: {}", format::dollars(projection.monthly_growth));
    let _ = writeln!(out, "Annual growth:  {}", format::dollars(projection.annual_growth));
    out
}

/// One status line of the leak counter.
#[must_use]
pub fn render_leak_line(meter: &LeakMeter) -> String {
    format!(
        "Revenue leaking: {} ({}/yr unrealized)",
        meter.display(),
        format::dollars(meter.annual_growth())
    )
}
