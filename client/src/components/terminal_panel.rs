//! Fake shell tail of the configuration log.

use growth::terminal::LogLevel;
use leptos::prelude::*;

use crate::state::simulator::SimulatorState;

fn level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "terminal__line terminal__line--info",
        LogLevel::Success => "terminal__line terminal__line--success",
        LogLevel::Warning => "terminal__line terminal__line--warning",
    }
}

#[component]
pub fn TerminalPanel() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulatorState>>();
    let entries = move || sim.with(|s| s.terminal.entries().cloned().collect::<Vec<_>>());

    view! {
        <div class="terminal">
            <div class="terminal__prompt">"user@frayze-sim:~/config$ tail -f system.log"</div>
            <div class="terminal__lines">
                <For each=entries key=|entry| entry.id let:entry>
                    <div class=level_class(entry.level)>{entry.text}</div>
                </For>
                <div class="terminal__cursor"></div>
            </div>
        </div>
    }
}
