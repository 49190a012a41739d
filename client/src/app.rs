use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use alliance_shared::{LeaverNotice, RosterSession, TableError};

use crate::command_panel::CommandPanel;
use crate::fetch;
use crate::leaver_alert::LeaverAlert;
use crate::roster_table::RosterTable;
use crate::tabs::{self, Tab};

/// Newtype wrappers so each signal gets its own Leptos context slot.
#[derive(Clone, Copy)]
pub(crate) struct Session(pub RwSignal<RosterSession>);
#[derive(Clone, Copy)]
pub(crate) struct ActiveTab(pub RwSignal<Tab>);
#[derive(Clone, Copy)]
pub(crate) struct PendingNotice(pub RwSignal<Option<LeaverNotice>>);
#[derive(Clone, Copy)]
pub(crate) struct LoadStatus(pub RwSignal<RosterLoad>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RosterLoad {
    Loading,
    Ready,
    Empty,
}

fn remove_loading_shell() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(shell) = document.get_element_by_id("app-loading-shell") {
        shell.remove();
    }
}

/// Count is the raw leaver list length; names are normalized and deduplicated.
fn leavers_detected(count: usize, normalized_names: &[&str]) -> String {
    format!("{count} leavers detected: {}", normalized_names.join(", "))
}

/// Fetch (or reuse) the roster once, load it into the session and surface
/// the leaver notice.
fn load_roster(
    session: RwSignal<RosterSession>,
    notice: RwSignal<Option<LeaverNotice>>,
    status: RwSignal<RosterLoad>,
) {
    spawn_local(async move {
        let payload = fetch::get_roster_data(fetch::host_payload()).await;
        let fetched_at = chrono::Utc::now();

        let mut outcome = None;
        session.update(|s| {
            let result = s.load(payload, fetched_at);
            let detected = leavers_detected(s.leavers().len(), &s.normalized_leaver_names());
            outcome = Some((result, s.take_leaver_notice(), detected));
        });
        let Some((result, pending_notice, detected)) = outcome else {
            return;
        };

        if let Some(pending) = pending_notice {
            web_sys::console::log_1(&detected.into());
            notice.set(Some(pending));
        }

        match result {
            Ok(summary) => {
                if summary.tournament_entries > 0 {
                    web_sys::console::log_1(
                        &format!(
                            "Merged {} tournament entries onto players",
                            summary.tournament_entries
                        )
                        .into(),
                    );
                }
                web_sys::console::info_1(
                    &format!("Successfully loaded {} players", summary.players).into(),
                );
                status.set(RosterLoad::Ready);
            }
            Err(TableError::NoPlayers) => {
                web_sys::console::error_1(&"No players found".into());
                status.set(RosterLoad::Empty);
            }
        }
        remove_loading_shell();
    });
}

/// Root application component. Owns the roster session and tab state.
#[component]
pub fn App() -> impl IntoView {
    let session: RwSignal<RosterSession> = RwSignal::new(RosterSession::new());
    let active_tab: RwSignal<Tab> = RwSignal::new(tabs::current_tab());
    let notice: RwSignal<Option<LeaverNotice>> = RwSignal::new(None);
    let status: RwSignal<RosterLoad> = RwSignal::new(RosterLoad::Loading);

    provide_context(Session(session));
    provide_context(ActiveTab(active_tab));
    provide_context(PendingNotice(notice));
    provide_context(LoadStatus(status));

    Effect::new(move || {
        tabs::bind_hash_navigation(active_tab);
        on_cleanup(tabs::unbind_hash_navigation);
    });

    // Single fetch-then-render pass on mount.
    Effect::new(move || {
        load_roster(session, notice, status);
    });

    view! {
        <div class="dashboard">
            <TabBar />
            <main>
                {move || match active_tab.get() {
                    Tab::Welcome => view! { <WelcomePanel /> }.into_any(),
                    Tab::Roster => view! { <RosterTable /> }.into_any(),
                    Tab::Command => view! { <CommandPanel /> }.into_any(),
                }}
            </main>
        </div>
        <LeaverAlert />
    }
}

#[component]
fn TabBar() -> impl IntoView {
    let ActiveTab(active_tab) = expect_context();

    view! {
        <nav class="tab-bar" style="display: flex; gap: 8px; margin-bottom: 16px;">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <a
                            href=format!("#{}", tab.id())
                            data-tab=tab.id()
                            class="tab-button"
                            class:active=move || active_tab.get() == tab
                            on:click=move |e| {
                                e.prevent_default();
                                tabs::navigate(tab, active_tab);
                            }
                        >
                            {tab.label()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn WelcomePanel() -> impl IntoView {
    let Session(session) = expect_context();
    let LoadStatus(status) = expect_context();
    let member_count = Memo::new(move |_| session.with(|s| s.players().len()));

    view! {
        <section id="welcome" class="tab-content active">
            <h1>"Alliance Dashboard"</h1>
            <p>
                {move || match status.get() {
                    RosterLoad::Loading => "Loading roster...".to_string(),
                    RosterLoad::Ready => format!("{} members on the roster.", member_count.get()),
                    RosterLoad::Empty => "Roster data is unavailable right now.".to_string(),
                }}
            </p>
        </section>
    }
}
