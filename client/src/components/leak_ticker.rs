//! "Revenue Leaking" banner with a live counter.
//!
//! DESIGN
//! ======
//! The interval exists only while annualized growth is positive. A growth
//! change drops the running interval before the meter restarts from zero, and
//! unmounting drops it for good, so no tick can outlive the banner.

use growth::leak::LeakMeter;
use growth::projection::Projection;
use leptos::prelude::*;

#[component]
pub fn LeakTicker() -> impl IntoView {
    let projection = expect_context::<Memo<Projection>>();
    let annual_growth = Memo::new(move |_| projection.get().annual_growth);
    let meter = RwSignal::new(LeakMeter::default());

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;
        use growth::leak::TICK_MILLIS;

        let ticker = StoredValue::new_local(None::<Interval>);
        Effect::new(move || {
            let growth = annual_growth.get();
            ticker.set_value(None);
            let mut running = false;
            meter.update(|m| running = m.sync(growth));
            if running {
                #[allow(clippy::cast_possible_truncation)]
                let interval = Interval::new(TICK_MILLIS as u32, move || meter.update(LeakMeter::tick));
                ticker.set_value(Some(interval));
            }
        });
        on_cleanup(move || {
            ticker.try_set_value(None);
        });
    }

    view! {
        <Show when=move || { annual_growth.get() > 0 }>
            <div class="leak-ticker">
                <div class="leak-ticker__copy">
                    <h4 class="leak-ticker__title">
                        "Revenue Leaking"
                        <span class="leak-ticker__live">"LIVE"</span>
                    </h4>
                    <p class="leak-ticker__subtitle">"Money left on the table during this session."</p>
                </div>
                <div class="leak-ticker__value">{move || meter.with(LeakMeter::display)}</div>
            </div>
        </Show>
    }
}
