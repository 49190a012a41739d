use leptos::prelude::*;

use crate::app::PendingNotice;

/// Fixed banner announcing leavers. Closing it clears the pending notice.
#[component]
pub fn LeaverAlert() -> impl IntoView {
    let PendingNotice(notice) = expect_context();

    move || {
        notice.get().map(|pending| {
            view! {
                <div
                    class="leaver-alert"
                    role="alert"
                    style="position: fixed; top: 20px; right: 20px; z-index: 10000; max-width: 400px; \
                           padding: 15px 40px 15px 20px; border-radius: 8px; background: #d9534f; \
                           color: #fff; font-weight: bold; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);"
                >
                    {pending.message()}
                    <button
                        class="leaver-alert-close"
                        title="Dismiss"
                        style="position: absolute; top: 8px; right: 10px; background: none; border: none; \
                               color: #fff; font-size: 18px; cursor: pointer;"
                        on:click=move |_| notice.set(None)
                    >
                        "\u{2715}"
                    </button>
                </div>
            }
        })
    }
}
