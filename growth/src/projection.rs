//! Funnel projection: baseline vs. module-optimized revenue.
//!
//! DESIGN
//! ======
//! The chain is traffic → leads → sales → revenue. Each module multiplies
//! exactly one stage (SEO traffic, chatbot conversion, CRM closing) and the
//! later stages are re-derived from it, so the only interaction between
//! modules is through that chain. Every stage rounds half-up to a whole
//! count before feeding the next one.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::metrics::InputMetrics;
use crate::modules::{Module, ModuleToggles};

/// Months in the projection horizon.
pub const MONTHS: usize = 12;

// =============================================================================
// MULTIPLIERS
// =============================================================================

/// Uplift applied to a stage when its module is active.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    /// Traffic-to-lead conversion multiplier.
    pub chatbot: f64,
    /// Lead-to-sale closing multiplier (the boosted rate is capped at 100%).
    pub crm: f64,
    /// Traffic multiplier.
    pub seo: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self { chatbot: 1.25, crm: 1.30, seo: 1.50 }
    }
}

impl Multipliers {
    /// Build a multiplier set, rejecting values that could shrink the funnel.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMultiplier`] when any value is not
    /// finite or is below 1.0.
    pub fn new(chatbot: f64, crm: f64, seo: f64) -> Result<Self, ConfigError> {
        for (module, value) in [(Module::Chatbot, chatbot), (Module::Crm, crm), (Module::Seo, seo)] {
            validate(module, value)?;
        }
        Ok(Self { chatbot, crm, seo })
    }

    #[must_use]
    pub fn get(&self, module: Module) -> f64 {
        match module {
            Module::Chatbot => self.chatbot,
            Module::Crm => self.crm,
            Module::Seo => self.seo,
        }
    }

    /// Multiplier in effect for `module` given the toggles (1.0 when off).
    #[must_use]
    pub fn effective(&self, module: Module, toggles: &ModuleToggles) -> f64 {
        if toggles.is_active(module) { self.get(module) } else { 1.0 }
    }

    /// Percentage uplift of one module: `1.25` → `25`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn efficiency_pct(&self, module: Module) -> i64 {
        round_half_up(self.get(module) * 100.0) as i64 - 100
    }
}

pub(crate) fn validate(module: Module, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMultiplier { module: module.key(), value })
    }
}

// =============================================================================
// PROJECTION
// =============================================================================

/// One pass through the funnel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Funnel {
    pub traffic: u64,
    pub conversion_rate_pct: f64,
    pub leads: u64,
    pub lead_to_sale_rate_pct: f64,
    pub sales: u64,
    /// Monthly revenue in dollars.
    pub revenue: u64,
}

/// Baseline and optimized funnels with the resulting growth.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub baseline: Funnel,
    pub optimized: Funnel,
    /// Optimized minus baseline monthly revenue.
    pub monthly_growth: i64,
    /// `monthly_growth × 12`.
    pub annual_growth: i64,
}

/// A month on the comparison chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub base: f64,
    pub optimized: f64,
}

/// Project the funnel for `inputs` with the active modules applied.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn project(inputs: &InputMetrics, toggles: &ModuleToggles, multipliers: &Multipliers) -> Projection {
    let deal_value = u64::from(inputs.avg_deal_value);

    let base_traffic = u64::from(inputs.monthly_traffic);
    let base_leads = round_count(count_f64(base_traffic) * (inputs.conversion_rate_pct / 100.0));
    let base_sales = round_count(count_f64(base_leads) * (inputs.lead_to_sale_rate_pct / 100.0));
    let baseline = Funnel {
        traffic: base_traffic,
        conversion_rate_pct: inputs.conversion_rate_pct,
        leads: base_leads,
        lead_to_sale_rate_pct: inputs.lead_to_sale_rate_pct,
        sales: base_sales,
        revenue: base_sales * deal_value,
    };

    let new_traffic = round_count(count_f64(base_traffic) * multipliers.effective(Module::Seo, toggles));
    let new_conversion = inputs.conversion_rate_pct * multipliers.effective(Module::Chatbot, toggles);
    let new_leads = round_count(count_f64(new_traffic) * (new_conversion / 100.0));
    let new_close_rate = (inputs.lead_to_sale_rate_pct * multipliers.effective(Module::Crm, toggles)).min(100.0);
    let new_sales = round_count(count_f64(new_leads) * (new_close_rate / 100.0));
    let optimized = Funnel {
        traffic: new_traffic,
        conversion_rate_pct: new_conversion,
        leads: new_leads,
        lead_to_sale_rate_pct: new_close_rate,
        sales: new_sales,
        revenue: new_sales * deal_value,
    };

    let monthly_growth = optimized.revenue as i64 - baseline.revenue as i64;
    Projection { baseline, optimized, monthly_growth, annual_growth: monthly_growth * 12 }
}

impl Projection {
    /// Additional sales per month.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn sales_delta(&self) -> i64 {
        self.optimized.sales as i64 - self.baseline.sales as i64
    }

    /// Twelve-month ramp from baseline to optimized revenue.
    ///
    /// The gap closes quadratically: month `i` (1-based) realises
    /// `(i / 12)²` of the monthly growth, reaching all of it in month 12.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn monthly_curve(&self) -> Vec<CurvePoint> {
        let base = self.baseline.revenue as f64;
        let growth = self.monthly_growth as f64;
        (1..=MONTHS)
            .map(|month| {
                let t = month as f64 / MONTHS as f64;
                CurvePoint { base, optimized: base + growth * t * t }
            })
            .collect()
    }
}

/// JavaScript-style rounding: halves round toward positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_count(value: f64) -> u64 {
    round_half_up(value).max(0.0) as u64
}

#[allow(clippy::cast_precision_loss)]
fn count_f64(value: u64) -> f64 {
    value as f64
}
