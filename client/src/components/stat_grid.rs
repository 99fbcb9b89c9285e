//! Bottom metric tiles of the dashboard.

use growth::format;
use growth::projection::Projection;
use leptos::prelude::*;

/// Sales, revenue, traffic, and conversion after optimization.
#[component]
pub fn StatGrid() -> impl IntoView {
    let projection = expect_context::<Memo<Projection>>();

    let sales = move || projection.get().optimized.sales.to_string();
    let sales_delta = move || {
        let delta = projection.get().sales_delta();
        (delta > 0).then(|| format!("+{delta}"))
    };
    let revenue = move || format::thousands_k(projection.get().optimized.revenue);
    let traffic = move || format::grouped(projection.get().optimized.traffic);
    let conversion = move || format::percent_1(projection.get().optimized.conversion_rate_pct);

    view! {
        <div class="stat-grid">
            <div class="stat stat--positive">
                <span class="stat__label">"Sales / Mo"</span>
                <span class="stat__value">{sales}</span>
                {move || sales_delta().map(|delta| view! { <span class="stat__sub">{delta}</span> })}
            </div>
            <div class="stat">
                <span class="stat__label">"Revenue / Mo"</span>
                <span class="stat__value">{revenue}</span>
            </div>
            <div class="stat">
                <span class="stat__label">"Traffic"</span>
                <span class="stat__value">{traffic}</span>
            </div>
            <div class="stat">
                <span class="stat__label">"Conversion"</span>
                <span class="stat__value">{conversion}</span>
            </div>
        </div>
    }
}
