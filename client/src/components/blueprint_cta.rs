//! "Claim AI Growth Blueprint" call to action.

use growth::lead::LeadFlow;
use leptos::prelude::*;

#[component]
pub fn BlueprintCta() -> impl IntoView {
    let lead = expect_context::<RwSignal<LeadFlow>>();

    view! {
        <div class="cta">
            <div class="cta__copy">
                <h3 class="cta__title">"Claim AI Growth Blueprint"</h3>
                <p class="cta__subtitle">"Generate custom Frayze growth strategy."</p>
            </div>
            <button type="button" class="cta__button" on:click=move |_| lead.update(LeadFlow::open)>
                "Generate Blueprint →"
            </button>
        </div>
    }
}
