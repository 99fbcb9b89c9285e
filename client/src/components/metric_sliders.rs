//! Baseline configuration: the four funnel sliders.

use growth::metrics::MetricField;
use leptos::prelude::*;

use crate::state::simulator::SimulatorState;

/// One labelled range input per [`MetricField`].
#[component]
pub fn MetricSliders() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulatorState>>();

    view! {
        <section class="panel metric-sliders">
            <h2 class="panel__title">"Baseline Configuration"</h2>
            <div class="metric-sliders__list">
                {MetricField::ALL
                    .into_iter()
                    .map(|field| {
                        let spec = field.spec();
                        let on_input = move |ev| {
                            let raw = event_target_value(&ev);
                            sim.update(|s| {
                                if let Err(e) = s.set_metric(field, &raw) {
                                    #[cfg(feature = "hydrate")]
                                    log::warn!("ignored slider input: {e}");
                                    #[cfg(not(feature = "hydrate"))]
                                    let _ = e;
                                }
                            });
                        };
                        view! {
                            <label class="metric-sliders__row">
                                <div class="metric-sliders__head">
                                    <span class="metric-sliders__label">{spec.label}</span>
                                    <span class="metric-sliders__value">
                                        {move || sim.with(|s| field.display(&s.inputs))}
                                    </span>
                                </div>
                                <input
                                    type="range"
                                    class="metric-sliders__input"
                                    min=spec.min.to_string()
                                    max=spec.max.to_string()
                                    step=spec.step.to_string()
                                    prop:value=move || sim.with(|s| field.value(&s.inputs)).to_string()
                                    on:input=on_input
                                />
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
