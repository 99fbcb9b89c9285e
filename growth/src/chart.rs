//! Geometry for the baseline-vs-optimized comparison graph.
//!
//! The graph is an SVG with a fixed 400×160 viewBox. Paths start at the
//! baseline revenue on the left edge and step across the twelve months.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::fmt::Write;

use crate::projection::{CurvePoint, Projection, round_half_up};

pub const VIEW_WIDTH: f64 = 400.0;
pub const VIEW_HEIGHT: f64 = 160.0;

/// Headroom above the tallest point.
const HEADROOM: f64 = 1.2;

/// Grid line positions, top to bottom, as a percentage of the scale maximum.
pub const GRID_PERCENTS: [u32; 5] = [100, 75, 50, 25, 0];

/// Precomputed paths and labels for one projection.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Dashed flat line at baseline revenue.
    pub baseline_path: String,
    /// Quadratic ramp to optimized revenue.
    pub optimized_path: String,
    /// Optimized path closed down to the x-axis, for the glow fill.
    pub area_path: String,
    /// Y coordinate of the month-12 end point.
    pub end_y: f64,
    /// Top of the value scale.
    pub max_value: f64,
    /// `(percent, label)` for each grid line, e.g. `(100, "$7k")`.
    pub grid_labels: Vec<(u32, String)>,
}

impl ChartGeometry {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_projection(projection: &Projection) -> Self {
        let points = projection.monthly_curve();
        let base = projection.baseline.revenue as f64;

        let max_value = points.iter().map(|p| p.base.max(p.optimized)).fold(0.0_f64, f64::max) * HEADROOM;
        let y = |value: f64| {
            if max_value > 0.0 { VIEW_HEIGHT - (value / max_value) * VIEW_HEIGHT } else { VIEW_HEIGHT }
        };

        let baseline_path = build_path(y(base), points.iter().map(|_| y(base)));
        let optimized_path = build_path(y(base), points.iter().map(|p: &CurvePoint| y(p.optimized)));
        let area_path = format!("{optimized_path} L{VIEW_WIDTH},{VIEW_HEIGHT} L0,{VIEW_HEIGHT} Z");
        let end_y = points.last().map_or(VIEW_HEIGHT, |p| y(p.optimized));

        let grid_labels = GRID_PERCENTS
            .iter()
            .map(|&pct| {
                let thousands = round_half_up(max_value * f64::from(pct) / 100.0 / 1000.0);
                (pct, format!("${thousands}k"))
            })
            .collect();

        Self { baseline_path, optimized_path, area_path, end_y, max_value, grid_labels }
    }
}

#[allow(clippy::cast_precision_loss)]
fn build_path(start_y: f64, ys: impl Iterator<Item = f64>) -> String {
    let mut path = format!("M0,{start_y}");
    let last = (crate::projection::MONTHS - 1) as f64;
    for (i, y) in ys.enumerate() {
        let x = (i as f64 / last) * VIEW_WIDTH;
        let _ = write!(path, " L{x},{y}");
    }
    path
}
