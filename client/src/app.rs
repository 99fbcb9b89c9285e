//! Root application component with routing and context providers.

use growth::lead::LeadFlow;
use growth::projection::Projection;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::simulator::SimulatorPage;
use crate::state::simulator::SimulatorState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the simulator state, the lead flow, and the derived projection
/// to every component, then routes `/` to the simulator.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let sim = RwSignal::new(SimulatorState::default());
    let lead = RwSignal::new(LeadFlow::default());
    let projection: Memo<Projection> = Memo::new(move |_| sim.with(SimulatorState::projection));

    provide_context(sim);
    provide_context(lead);
    provide_context(projection);

    // Server-configured multipliers replace the defaults once fetched.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(multipliers) = crate::net::summary::fetch_multipliers().await {
            sim.update(|s| s.multipliers = multipliers);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/growth-simulator.css"/>
        <Title text="Frayze Growth Simulator"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SimulatorPage/>
            </Routes>
        </Router>
    }
}
