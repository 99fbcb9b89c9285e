//! Clickable module cards that switch the automation modules on and off.

use growth::modules::Module;
use leptos::prelude::*;

use crate::state::simulator::SimulatorState;

/// The three module cards under an "Activate Modules" heading.
#[component]
pub fn ModulePanel() -> impl IntoView {
    view! {
        <section class="module-toggles">
            <h2 class="panel__title">"Activate Modules"</h2>
            {Module::ALL.into_iter().map(|module| view! { <ModuleToggleCard module/> }).collect_view()}
        </section>
    }
}

/// One card. Clicking flips the module and logs the change.
#[component]
pub fn ModuleToggleCard(module: Module) -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulatorState>>();
    let active = move || sim.with(|s| s.toggles.is_active(module));

    view! {
        <button
            type="button"
            class=format!("module-card module-card--{}", module.key())
            class:module-card--active=active
            aria-pressed=move || active().to_string()
            on:click=move |_| {
                sim.update(|s| {
                    s.toggle(module);
                });
            }
        >
            <div class="module-card__body">
                <h3 class="module-card__title">{module.title()}</h3>
                <p class="module-card__description">{module.description()}</p>
            </div>
            <span class="module-card__impact">{module.impact_text()}</span>
        </button>
    }
}
