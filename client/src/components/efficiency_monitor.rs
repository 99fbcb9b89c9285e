//! Per-module efficiency bars ("System Efficiency Diagnostics").

use growth::modules::Module;
use leptos::prelude::*;

use crate::state::simulator::SimulatorState;

/// Display order and engine names of the bars.
const ENGINES: [(Module, &str); 3] = [
    (Module::Seo, "Acquisition Engine"),
    (Module::Chatbot, "Engagement Core"),
    (Module::Crm, "Revenue Pipeline"),
];

#[component]
pub fn EfficiencyMonitor() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulatorState>>();

    view! {
        <div class="efficiency">
            <h4 class="efficiency__title">"System Efficiency Diagnostics"</h4>
            {ENGINES
                .into_iter()
                .map(|(module, label)| {
                    let active = move || sim.with(|s| s.toggles.is_active(module));
                    let badge = move || format!("+{}% EFFICIENCY", sim.with(|s| s.multipliers.efficiency_pct(module)));
                    view! {
                        <div class=format!("efficiency__row efficiency__row--{}", module.key())>
                            <div class="efficiency__head">
                                <span class="efficiency__label">{label}</span>
                                <Show when=active>
                                    <span class="efficiency__badge">{badge}</span>
                                </Show>
                            </div>
                            <div class="efficiency__track">
                                <div class="efficiency__base"></div>
                                <Show when=active>
                                    <div class="efficiency__boost"></div>
                                </Show>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
