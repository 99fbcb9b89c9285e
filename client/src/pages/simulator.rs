//! The growth simulator page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Left column: sliders, module cards, and (outside embed mode) the terminal.
//! Right column: leak ticker, dashboard card, and the blueprint call to
//! action. `?embed=true` strips the page chrome for iframe use.

use growth::presentation::Presentation;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::blueprint_cta::BlueprintCta;
use crate::components::efficiency_monitor::EfficiencyMonitor;
use crate::components::impact::{ComparisonGraph, ImpactHeader};
use crate::components::lead_modal::LeadModal;
use crate::components::leak_ticker::LeakTicker;
use crate::components::metric_sliders::MetricSliders;
use crate::components::module_card::ModulePanel;
use crate::components::score_gauge::ScoreGauge;
use crate::components::stat_grid::StatGrid;
use crate::components::terminal_panel::TerminalPanel;

#[component]
pub fn SimulatorPage() -> impl IntoView {
    let query = use_query_map();
    let presentation = Memo::new(move |_| {
        let embed = query.with(|q| q.get("embed"));
        Presentation::from_embed_param(embed.as_deref())
    });
    let chrome = move || presentation.get().show_chrome();

    view! {
        <div class=move || presentation.get().page_class()>
            <Show when=chrome>
                <div class="ambient"></div>
                <header class="site-header">
                    <div class="site-header__brand">
                        <span class="site-header__logo">"F"</span>
                        <span class="site-header__name">"frayze" <span class="accent">".ca"</span></span>
                    </div>
                    <div class="site-header__status">"System Online"</div>
                </header>
            </Show>

            <main class=move || presentation.get().main_class()>
                <Show when=chrome>
                    <section class="hero">
                        <div class="hero__eyebrow">"ENGINEERING GROWTH SYSTEMS"</div>
                        <h1 class="hero__title">
                            "Simulate Your " <span class="hero__gradient">"Revenue Potential"</span>
                        </h1>
                        <p class="hero__lede">
                            "Don't guess. Engineer it. Configure your automation stack below and visualize the mathematical impact of Frayze systems on your bottom line."
                        </p>
                    </section>
                </Show>

                <div class="layout">
                    <div class="layout__inputs">
                        <MetricSliders/>
                        <ModulePanel/>
                        <Show when=move || presentation.get().show_terminal()>
                            <TerminalPanel/>
                        </Show>
                    </div>

                    <div class="layout__visuals">
                        <LeakTicker/>
                        <div class="dashboard">
                            <ScoreGauge/>
                            <ImpactHeader/>
                            <ComparisonGraph/>
                            <EfficiencyMonitor/>
                            <StatGrid/>
                        </div>
                        <BlueprintCta/>
                    </div>
                </div>
            </main>

            <LeadModal/>
        </div>
    }
}
