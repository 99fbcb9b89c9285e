//! Lead capture modal: collect contact details, wait for the summary, then
//! offer the blueprint download.
//!
//! DESIGN
//! ======
//! All transitions go through [`LeadFlow`]. The summary request runs in a
//! local task holding the submit ticket; if the visitor dismisses the modal
//! first, the late result is rejected by `settle` instead of being cancelled.

use growth::lead::{LeadFlow, LeadForm, LeadPhase};
use growth::report::{REPORT_CONTENT_TYPE, REPORT_FILE_NAME, render_report};
use leptos::prelude::*;

use crate::net::summary::request_summary;
use crate::state::simulator::SimulatorState;
use crate::util::date::today;
use crate::util::download::offer_download;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Collecting,
    Analyzing,
    Ready,
}

fn step_of(flow: &LeadFlow) -> Step {
    match flow.phase() {
        LeadPhase::Collecting => Step::Collecting,
        LeadPhase::Submitting { .. } => Step::Analyzing,
        LeadPhase::Ready { .. } => Step::Ready,
    }
}

#[component]
pub fn LeadModal() -> impl IntoView {
    let lead = expect_context::<RwSignal<LeadFlow>>();
    let sim = expect_context::<RwSignal<SimulatorState>>();
    let form_error = RwSignal::new(None::<String>);
    let download_error = RwSignal::new(None::<String>);

    let step = Memo::new(move |_| lead.with(step_of));
    let close = move |_| lead.update(LeadFlow::dismiss);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut submitted = None;
        lead.update(|flow| submitted = Some(flow.submit()));
        let Some(submitted) = submitted else {
            return;
        };
        let ticket = match submitted {
            Ok(ticket) => ticket,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        form_error.set(None);

        let url = lead.with_untracked(|flow| flow.form.url.clone());
        let request = sim.with_untracked(|s| s.summary_request(&url));
        leptos::task::spawn_local(async move {
            let summary = request_summary(&request).await;
            lead.try_update(|flow| flow.settle(ticket, summary));
        });
    };

    let on_download = move |_| {
        let html = lead.with_untracked(|flow| {
            flow.summary()
                .map(|summary| sim.with_untracked(|s| render_report(&s.report_context(&flow.form, summary, today()))))
        });
        let Some(html) = html else {
            return;
        };
        match offer_download(REPORT_FILE_NAME, REPORT_CONTENT_TYPE, &html) {
            Ok(()) => download_error.set(None),
            Err(e) => download_error.set(Some(e)),
        }
    };

    view! {
        <Show when=move || lead.with(LeadFlow::is_open)>
            <div class="lead-modal__backdrop" on:click=close></div>
            <div class="lead-modal" role="dialog" aria-modal="true">
                <button type="button" class="lead-modal__close" on:click=close title="Close">
                    "×"
                </button>

                <Show when=move || step.get() == Step::Collecting>
                    <h3 class="lead-modal__title">"Export Growth Blueprint"</h3>
                    <p class="lead-modal__intro">
                        "We'll use our AI engine to analyze your provided URL and metrics to generate a custom growth strategy."
                    </p>
                    <form class="lead-modal__form" on:submit=on_submit>
                        <LeadField
                            label="Website URL"
                            input_type="url"
                            placeholder="https://yourbusiness.ca"
                            get=|form: &LeadForm| form.url.clone()
                            set=|form: &mut LeadForm, value| form.url = value
                        />
                        <LeadField
                            label="Business Email"
                            input_type="email"
                            placeholder="name@company.com"
                            get=|form: &LeadForm| form.email.clone()
                            set=|form: &mut LeadForm, value| form.email = value
                        />
                        <LeadField
                            label="Phone Number"
                            input_type="tel"
                            placeholder="(555) 123-4567"
                            get=|form: &LeadForm| form.phone.clone()
                            set=|form: &mut LeadForm, value| form.phone = value
                        />
                        {move || form_error.get().map(|e| view! { <p class="lead-modal__error">{e}</p> })}
                        <button type="submit" class="lead-modal__submit">"Generate AI Blueprint"</button>
                    </form>
                    <div class="lead-modal__secure">"256-bit Secure Transmission"</div>
                </Show>

                <Show when=move || step.get() == Step::Analyzing>
                    <div class="lead-modal__analyzing">
                        <div class="lead-modal__spinner"></div>
                        <h3 class="lead-modal__title">"Analyzing with Gemini AI..."</h3>
                        <div class="lead-modal__steps">
                            <p>"Connecting to Neural Engine..."</p>
                            <p>"Scanning metric configuration..."</p>
                            <p>"Writing Executive Summary..."</p>
                        </div>
                    </div>
                </Show>

                <Show when=move || step.get() == Step::Ready>
                    <div class="lead-modal__ready">
                        <h3 class="lead-modal__title">"Blueprint Ready!"</h3>
                        <p class="lead-modal__intro">"Analysis complete. Download your personalized report."</p>
                        <button type="button" class="lead-modal__download" on:click=on_download>
                            "Download Your Blueprint"
                        </button>
                        {move || download_error.get().map(|e| view! { <p class="lead-modal__error">{e}</p> })}
                        <div class="lead-modal__help">
                            <p class="lead-modal__help-title">"Can't open the file?"</p>
                            "If the file downloads with a random name, rename it to end in "
                            <b>".html"</b>
                            " and double-click to open."
                        </div>
                        <button type="button" class="lead-modal__return" on:click=close>
                            "Return to Simulator"
                        </button>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

/// Required text input bound to one [`LeadForm`] field.
#[component]
fn LeadField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    get: fn(&LeadForm) -> String,
    set: fn(&mut LeadForm, String),
) -> impl IntoView {
    let lead = expect_context::<RwSignal<LeadFlow>>();

    view! {
        <label class="lead-modal__field">
            <span class="lead-modal__label">{label}</span>
            <input
                required
                class="lead-modal__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || lead.with(|flow| get(&flow.form))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    lead.update(|flow| set(&mut flow.form, value));
                }
            />
        </label>
    }
}
