//! Baseline business metrics edited through the four dashboard sliders.
//!
//! DESIGN
//! ======
//! The sliders are the only writers. Range enforcement lives here, on the
//! input surface, so the projection engine can stay a plain formula over
//! whatever values it is handed.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use serde::{Deserialize, Serialize};

use crate::format;

/// Error produced when a slider value cannot be applied.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// The raw slider value is not a finite number.
    #[error("{field} value is not a number: {raw:?}")]
    Unparseable { field: &'static str, raw: String },
}

/// The four funnel inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMetrics {
    pub monthly_traffic: u32,
    /// Traffic-to-lead conversion, in percent.
    pub conversion_rate_pct: f64,
    /// Lead-to-sale closing rate, in percent.
    pub lead_to_sale_rate_pct: f64,
    /// Revenue per closed sale, in dollars.
    pub avg_deal_value: u32,
}

impl Default for InputMetrics {
    fn default() -> Self {
        Self { monthly_traffic: 1000, conversion_rate_pct: 2.0, lead_to_sale_rate_pct: 20.0, avg_deal_value: 500 }
    }
}

/// Range and granularity of one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Identifies one of the four sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricField {
    Traffic,
    ConversionRate,
    LeadToSaleRate,
    DealValue,
}

impl MetricField {
    /// Slider order on the dashboard.
    pub const ALL: [Self; 4] = [Self::Traffic, Self::ConversionRate, Self::LeadToSaleRate, Self::DealValue];

    #[must_use]
    pub fn spec(self) -> SliderSpec {
        match self {
            Self::Traffic => SliderSpec { label: "Monthly Traffic", min: 100.0, max: 50_000.0, step: 100.0 },
            Self::ConversionRate => SliderSpec { label: "Traffic-to-Lead %", min: 0.1, max: 10.0, step: 0.1 },
            Self::LeadToSaleRate => SliderSpec { label: "Lead-to-Sale %", min: 1.0, max: 50.0, step: 1.0 },
            Self::DealValue => SliderSpec { label: "Avg. Deal Value", min: 50.0, max: 5_000.0, step: 50.0 },
        }
    }

    /// Whether the field holds a whole number.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Traffic | Self::DealValue)
    }

    /// Current value of this field as the slider sees it.
    #[must_use]
    pub fn value(self, metrics: &InputMetrics) -> f64 {
        match self {
            Self::Traffic => f64::from(metrics.monthly_traffic),
            Self::ConversionRate => metrics.conversion_rate_pct,
            Self::LeadToSaleRate => metrics.lead_to_sale_rate_pct,
            Self::DealValue => f64::from(metrics.avg_deal_value),
        }
    }

    /// Read-out shown next to the slider label.
    #[must_use]
    pub fn display(self, metrics: &InputMetrics) -> String {
        match self {
            Self::Traffic => format::grouped(u64::from(metrics.monthly_traffic)),
            Self::ConversionRate => format::percent_short(metrics.conversion_rate_pct),
            Self::LeadToSaleRate => format::percent_short(metrics.lead_to_sale_rate_pct),
            Self::DealValue => format!("${}", metrics.avg_deal_value),
        }
    }
}

impl InputMetrics {
    /// Apply a raw slider value (the `value` string of a range input).
    ///
    /// Whole-number fields drop any fractional part. The result is clamped
    /// into the slider range before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Unparseable`] when `raw` is not a finite number;
    /// the metrics are left unchanged.
    pub fn set_from_slider(&mut self, field: MetricField, raw: &str) -> Result<(), InputError> {
        let parsed = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::Unparseable { field: field.spec().label, raw: raw.to_owned() })?;
        self.set(field, parsed);
        Ok(())
    }

    /// Store `value` for `field`, clamped into the slider range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set(&mut self, field: MetricField, value: f64) {
        let spec = field.spec();
        let value = if field.is_integer() { value.trunc() } else { value };
        let clamped = value.clamp(spec.min, spec.max);
        match field {
            MetricField::Traffic => self.monthly_traffic = clamped as u32,
            MetricField::ConversionRate => self.conversion_rate_pct = clamped,
            MetricField::LeadToSaleRate => self.lead_to_sale_rate_pct = clamped,
            MetricField::DealValue => self.avg_deal_value = clamped as u32,
        }
    }

    /// Build metrics from arbitrary values, clamping each like its slider.
    #[must_use]
    pub fn clamped(monthly_traffic: f64, conversion_rate_pct: f64, lead_to_sale_rate_pct: f64, avg_deal_value: f64) -> Self {
        let mut metrics = Self::default();
        metrics.set(MetricField::Traffic, monthly_traffic);
        metrics.set(MetricField::ConversionRate, conversion_rate_pct);
        metrics.set(MetricField::LeadToSaleRate, lead_to_sale_rate_pct);
        metrics.set(MetricField::DealValue, avg_deal_value);
        metrics
    }
}
