//! Simulator session state: sliders, module toggles, multipliers, terminal.
//!
//! DESIGN
//! ======
//! One `RwSignal<SimulatorState>` is provided at the app root. Everything the
//! dashboard shows is derived from it through [`SimulatorState::projection`];
//! nothing derived is stored. Toggling a module and logging the change happen
//! in one update so the terminal never disagrees with the cards.

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;

use growth::lead::LeadForm;
use growth::metrics::{InputError, InputMetrics, MetricField};
use growth::modules::{GrowthScore, Module, ModuleToggles};
use growth::projection::{Multipliers, Projection, project};
use growth::report::ReportContext;
use growth::summary::SummaryRequest;
use growth::terminal::TerminalLog;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulatorState {
    pub inputs: InputMetrics,
    pub toggles: ModuleToggles,
    pub multipliers: Multipliers,
    pub terminal: TerminalLog,
}

impl SimulatorState {
    #[must_use]
    pub fn projection(&self) -> Projection {
        project(&self.inputs, &self.toggles, &self.multipliers)
    }

    /// Apply a raw range-input value.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] for unparseable input; state is unchanged.
    pub fn set_metric(&mut self, field: MetricField, raw: &str) -> Result<(), InputError> {
        self.inputs.set_from_slider(field, raw)
    }

    /// Flip `module` and log the change. Returns the new state.
    pub fn toggle(&mut self, module: Module) -> bool {
        let active = self.toggles.toggle(module);
        self.terminal.record_toggle(module, active);
        active
    }

    #[must_use]
    pub fn score(&self) -> GrowthScore {
        GrowthScore::from_toggles(&self.toggles)
    }

    /// Body for `POST /api/summary`.
    #[must_use]
    pub fn summary_request(&self, url: &str) -> SummaryRequest {
        SummaryRequest::new(&self.inputs, &self.toggles, &self.projection(), url)
    }

    /// Snapshot for the downloadable report.
    #[must_use]
    pub fn report_context(&self, lead: &LeadForm, summary: &str, date: time::Date) -> ReportContext {
        ReportContext {
            projection: self.projection(),
            toggles: self.toggles,
            lead: lead.clone(),
            summary: summary.to_owned(),
            date,
        }
    }
}
