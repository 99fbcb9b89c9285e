//! Projected annual impact header and the baseline-vs-optimized graph.

use growth::chart::{ChartGeometry, VIEW_HEIGHT, VIEW_WIDTH};
use growth::format;
use growth::projection::Projection;
use leptos::prelude::*;

/// Headline with the additional annual revenue.
#[component]
pub fn ImpactHeader() -> impl IntoView {
    let projection = expect_context::<Memo<Projection>>();
    let headline = move || format!("+{}", format::dollars(projection.get().annual_growth.max(0)));

    view! {
        <div class="impact-header">
            <div>
                <h3 class="impact-header__title">"Projected Annual Impact"</h3>
                <p class="impact-header__subtitle">"Based on system configuration"</p>
            </div>
            <div class="impact-header__figure">
                <p class="impact-header__caption">"Additional Annual Revenue"</p>
                <div class="impact-header__value">{headline}</div>
            </div>
        </div>
    }
}

/// Twelve-month comparison graph with grid labels.
#[component]
pub fn ComparisonGraph() -> impl IntoView {
    let projection = expect_context::<Memo<Projection>>();
    let geometry = Memo::new(move |_| ChartGeometry::from_projection(&projection.get()));
    let growing = move || projection.get().monthly_growth > 0;
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");

    view! {
        <div class="graph">
            <div class="graph__grid">
                {move || {
                    geometry
                        .get()
                        .grid_labels
                        .into_iter()
                        .map(|(_, label)| {
                            view! {
                                <div class="graph__grid-line">
                                    <span class="graph__grid-label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <svg class="graph__svg" viewBox=view_box>
                <defs>
                    <linearGradient id="glowGradient" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color="#0891b2" stop-opacity="0.2"/>
                        <stop offset="100%" stop-color="#0891b2" stop-opacity="0"/>
                    </linearGradient>
                </defs>
                <Show when=growing>
                    <path class="graph__area" d=move || geometry.get().area_path fill="url(#glowGradient)"/>
                </Show>
                <path class="graph__baseline" d=move || geometry.get().baseline_path fill="none"/>
                <path class="graph__optimized" d=move || geometry.get().optimized_path fill="none"/>
                <circle class="graph__end" cx=VIEW_WIDTH.to_string() cy=move || geometry.get().end_y.to_string() r="4"/>
            </svg>

            <Show when=growing>
                <div class="graph__badge">
                    <div class="graph__badge-title">"New Trajectory"</div>
                    <div class="graph__badge-subtitle">"Optimized by Frayze"</div>
                </div>
            </Show>

            <div class="graph__months">
                <span>"Month 1"</span>
                <span>"Month 6"</span>
                <span>"Month 12"</span>
            </div>
        </div>
    }
}
