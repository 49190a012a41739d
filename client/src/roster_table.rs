use std::cell::RefCell;

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use alliance_shared::table::{ColumnModel, RowModel, TableModel, ToggleModel};
use alliance_shared::{RosterSession, TableError};

use crate::app::{LoadStatus, RosterLoad, Session};
use crate::config;
use crate::time_format::format_updated_at;

thread_local! {
    static AGE_TICK: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Keep `clock` near wall time so the "Last updated" age keeps moving.
fn start_age_tick(clock: RwSignal<i64>) {
    let interval = Interval::new(config::AGE_TICK_MS, move || clock.set(now_secs()));
    AGE_TICK.with(|slot| {
        // Dropping the previous interval cancels it.
        *slot.borrow_mut() = Some(interval);
    });
}

fn stop_age_tick() {
    AGE_TICK.with(|slot| {
        slot.borrow_mut().take();
    });
}

/// `display` value for a header or body cell.
fn cell_display(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}

fn sort_indicator(sorted: Option<bool>) -> &'static str {
    match sorted {
        Some(true) => " \u{25B2}",
        Some(false) => " \u{25BC}",
        None => "",
    }
}

/// Sortable, filterable roster table. Rebuilt from the session on every change.
#[component]
pub fn RosterTable() -> impl IntoView {
    let Session(session) = expect_context();
    let LoadStatus(status) = expect_context();

    let table = Memo::new(move |_| session.with(RosterSession::table));
    let clock = RwSignal::new(now_secs());
    let updated = Memo::new(move |_| {
        let reference = clock.get();
        session.with(|s| {
            s.snapshot()
                .map(|snapshot| format_updated_at(snapshot.fetched_at, reference))
        })
    });

    Effect::new(move || {
        start_age_tick(clock);
        on_cleanup(stop_age_tick);
    });

    Effect::new(move || {
        let Ok(model) = table.get() else {
            return;
        };
        for row in model.leaver_rows() {
            web_sys::console::log_1(&format!("Highlighting {} as leaver", row.name).into());
        }
    });

    view! {
        <section id="roster" class="tab-content active">
            <div id="roster-inner">
                {move || match table.get() {
                    Ok(model) => view! {
                        {move || updated.get().map(|age| view! {
                            <div class="roster-updated" style="font-size: 0.75rem; opacity: 0.7; margin-bottom: 8px;">
                                "Last updated " {age}
                            </div>
                        })}
                        {render_table(model, session)}
                    }
                    .into_any(),
                    Err(TableError::NoPlayers) => {
                        let message = match status.get() {
                            RosterLoad::Loading => "Loading roster...",
                            RosterLoad::Ready | RosterLoad::Empty => "No players found.",
                        };
                        view! { <div class="roster-empty">{message}</div> }.into_any()
                    }
                }}
            </div>
        </section>
    }
}

fn render_table(model: TableModel, session: RwSignal<RosterSession>) -> impl IntoView {
    let TableModel {
        columns,
        toggles,
        tournament_toggle,
        rows,
    } = model;

    view! {
        <div
            class="column-toggles"
            style="margin-bottom: 15px; display: flex; flex-wrap: wrap; gap: 10px;"
        >
            <label style="display: flex; align-items: center; gap: 5px; cursor: pointer;">
                <input
                    type="checkbox"
                    style="cursor: pointer;"
                    prop:checked=tournament_toggle
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        session.update(|s| s.set_tournament_visible(checked));
                    }
                />
                "Tournament columns"
            </label>
            {toggles
                .into_iter()
                .map(|toggle| column_toggle(toggle, session))
                .collect_view()}
        </div>
        <table id="roster-table">
            <thead>
                <tr>
                    {columns
                        .into_iter()
                        .map(|column| header_cell(column, session))
                        .collect_view()}
                </tr>
            </thead>
            <tbody>{rows.into_iter().map(body_row).collect_view()}</tbody>
        </table>
    }
}

fn column_toggle(toggle: ToggleModel, session: RwSignal<RosterSession>) -> impl IntoView {
    let column = toggle.column.clone();
    view! {
        <label
            style="display: flex; align-items: center; gap: 5px; cursor: pointer;"
            class:tournament-toggle=toggle.tournament
        >
            <input
                type="checkbox"
                style="cursor: pointer;"
                data-column=toggle.column
                prop:checked=toggle.checked
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    session.update(|s| s.set_visible(&column, checked));
                }
            />
            {toggle.label}
        </label>
    }
}

fn header_cell(column: ColumnModel, session: RwSignal<RosterSession>) -> impl IntoView {
    let key = column.key.clone();
    view! {
        <th
            data-column=column.key
            title="Click to sort"
            style="cursor: pointer; user-select: none;"
            style:display=cell_display(column.visible)
            on:click=move |_| session.update(|s| s.sort_by(&key))
        >
            {column.label}
            {sort_indicator(column.sorted)}
        </th>
    }
}

fn body_row(row: RowModel) -> impl IntoView {
    view! {
        <tr class:leaver-row=row.is_leaver>
            {row
                .cells
                .into_iter()
                .map(|cell| {
                    let bar = cell.score_bar_px.map(|px| view! {
                        <div
                            class="tournament-score-bar"
                            style=format!("width: {px}px; height: 4px; background: #f5c542; border-radius: 2px;")
                        />
                    });
                    view! {
                        <td data-column=cell.column style:display=cell_display(cell.visible)>
                            {bar}
                            {cell.text}
                        </td>
                    }
                })
                .collect_view()}
        </tr>
    }
}
