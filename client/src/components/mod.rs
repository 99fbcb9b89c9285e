//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the simulator dashboard while reading/writing shared
//! state from Leptos context providers (`SimulatorState`, `LeadFlow`, and the
//! derived `Projection` memo).

pub mod blueprint_cta;
pub mod efficiency_monitor;
pub mod impact;
pub mod lead_modal;
pub mod leak_ticker;
pub mod metric_sliders;
pub mod module_card;
pub mod score_gauge;
pub mod stat_grid;
pub mod terminal_panel;
