use super::*;
use growth::{InputMetrics, project};

fn all_modules() -> Projection {
    project(&InputMetrics::default(), &ModuleToggles::all(), &Multipliers::default())
}

#[test]
fn projection_lists_both_funnels() {
    let text = render_projection(&all_modules(), &ModuleToggles::all(), &Multipliers::default());
    assert!(text.contains("BASELINE"));
    assert!(text.contains("OPTIMIZED"));
    assert!(text.contains("1,500"));
    assert!(text.contains("$2.0k"));
    assert!(text.contains("$5.0k"));
}

#[test]
fn projection_reports_growth_totals() {
    let text = render_projection(&all_modules(), &ModuleToggles::all(), &Multipliers::default());
    assert!(text.contains("Monthly growth: $3,000"));
    assert!(text.contains("Annual growth:  $36,000"));
}

#[test]
fn projection_lists_active_module_lifts() {
    let text = render_projection(&all_modules(), &ModuleToggles::all(), &Multipliers::default());
    assert!(text.contains("Active modules: AI Agent, Smart CRM, SEO Engine"));
    assert!(text.contains("+25%"));
    assert!(text.contains("+30%"));
    assert!(text.contains("+50%"));
}

#[test]
fn projection_without_modules_shows_no_growth() {
    let toggles = ModuleToggles::default();
    let projection = project(&InputMetrics::default(), &toggles, &Multipliers::default());
    let text = render_projection(&projection, &toggles, &Multipliers::default());
    assert!(text.contains("Active modules: None Selected"));
    assert!(text.contains("Annual growth:  $0"));
}

#[test]
fn leak_line_shows_counter_and_annual_figure() {
    let mut meter = LeakMeter::new(36_000);
    assert_eq!(render_leak_line(&meter), "Revenue leaking: $0.0000 ($36,000/yr unrealized)");
    meter.tick();
    assert!(render_leak_line(&meter).starts_with("Revenue leaking: $0.0001"));
}
