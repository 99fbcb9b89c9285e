#![allow(clippy::float_cmp)]

use super::*;
use crate::metrics::InputMetrics;
use crate::modules::ModuleToggles;
use crate::projection::{Multipliers, project};

fn projection(toggles: ModuleToggles) -> Projection {
    project(&InputMetrics::default(), &toggles, &Multipliers::default())
}

#[test]
fn max_value_includes_headroom() {
    let g = ChartGeometry::from_projection(&projection(ModuleToggles::all()));
    assert!((g.max_value - 6000.0).abs() < 1e-9);
}

#[test]
fn paths_start_at_baseline_on_left_edge() {
    let g = ChartGeometry::from_projection(&projection(ModuleToggles::all()));
    let base_y = VIEW_HEIGHT - (2000.0 / 6000.0) * VIEW_HEIGHT;
    let start = format!("M0,{base_y}");
    assert!(g.baseline_path.starts_with(&start));
    assert!(g.optimized_path.starts_with(&start));
    assert_eq!(g.baseline_path.matches(" L").count(), 12);
    assert!(g.baseline_path.ends_with(&format!(" L400,{base_y}")));
}

#[test]
fn optimized_path_ends_at_full_growth() {
    let g = ChartGeometry::from_projection(&projection(ModuleToggles::all()));
    let end_y = VIEW_HEIGHT - (5000.0 / 6000.0) * VIEW_HEIGHT;
    assert!((g.end_y - end_y).abs() < 1e-9);
}

#[test]
fn area_path_closes_to_axis() {
    let g = ChartGeometry::from_projection(&projection(ModuleToggles::all()));
    assert!(g.area_path.starts_with(&g.optimized_path));
    assert!(g.area_path.ends_with("L400,160 L0,160 Z"));
}

#[test]
fn grid_labels_scale_in_thousands() {
    let g = ChartGeometry::from_projection(&projection(ModuleToggles::all()));
    let labels: Vec<&str> = g.grid_labels.iter().map(|(_, l)| l.as_str()).collect();
    assert_eq!(labels, vec!["$6k", "$5k", "$3k", "$2k", "$0k"]);
}

#[test]
fn flat_projection_draws_identical_lines() {
    let g = ChartGeometry::from_projection(&projection(ModuleToggles::default()));
    assert_eq!(g.baseline_path, g.optimized_path);
}

#[test]
fn zero_revenue_does_not_divide_by_zero() {
    let inputs = InputMetrics { monthly_traffic: 0, ..InputMetrics::default() };
    let p = project(&inputs, &ModuleToggles::default(), &Multipliers::default());
    let g = ChartGeometry::from_projection(&p);
    assert_eq!(g.max_value, 0.0);
    assert_eq!(g.end_y, VIEW_HEIGHT);
    assert!(!g.baseline_path.contains("NaN"));
}
