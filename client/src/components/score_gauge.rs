//! Circular growth score in the dashboard corner.

use growth::modules::ScoreTier;
use leptos::prelude::*;

use crate::state::simulator::SimulatorState;

// Circle of circumference 100 in a 36×36 viewBox.
const RING_PATH: &str = "M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831";

fn tier_class(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::Critical => "score-gauge score-gauge--critical",
        ScoreTier::Warning => "score-gauge score-gauge--warning",
        ScoreTier::Healthy => "score-gauge score-gauge--healthy",
    }
}

#[component]
pub fn ScoreGauge() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulatorState>>();
    let score = Memo::new(move |_| sim.with(SimulatorState::score));

    view! {
        <div class=move || tier_class(score.get().tier())>
            <div class="score-gauge__ring">
                <svg class="score-gauge__svg" viewBox="0 0 36 36">
                    <path
                        d=RING_PATH
                        fill="none"
                        stroke="currentColor"
                        stroke-width="3"
                        stroke-dasharray=move || format!("{}, 100", score.get().0)
                    />
                </svg>
                <span class="score-gauge__value">{move || score.get().0}</span>
            </div>
            <span class="score-gauge__label">"Score"</span>
        </div>
    }
}
