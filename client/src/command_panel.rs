use leptos::prelude::*;

use alliance_shared::RosterSession;

use crate::app::Session;

#[component]
pub fn CommandPanel() -> impl IntoView {
    let Session(session) = expect_context();
    let roster = Memo::new(move |_| session.with(RosterSession::command_roster));

    Effect::new(move || {
        roster.track();
        if session.with_untracked(|s| s.snapshot().is_some()) {
            web_sys::console::log_1(&"Command roster updated".into());
        }
    });

    view! {
        <section id="command" class="tab-content active">
            <h2>"Command"</h2>
            <p>
                <strong>"Admiral: "</strong>
                <span id="command-admiral">{move || roster.with(|r| r.admirals.clone())}</span>
            </p>
            <p>
                <strong>"Commodores: "</strong>
                <span id="command-commodores">{move || roster.with(|r| r.commodores.clone())}</span>
            </p>
            <p>
                <strong>"Premiers: "</strong>
                <span id="command-premiers">{move || roster.with(|r| r.premiers.clone())}</span>
            </p>
        </section>
    }
}
