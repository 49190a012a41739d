use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Welcome,
    Roster,
    Command,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Welcome, Tab::Roster, Tab::Command];

    pub fn id(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Roster => "roster",
            Self::Command => "command",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Roster => "Roster",
            Self::Command => "Command",
        }
    }

    /// Unknown or empty hashes land on the welcome tab.
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            "roster" => Self::Roster,
            "command" => Self::Command,
            _ => Self::Welcome,
        }
    }
}

struct HashChangeBinding {
    window: web_sys::Window,
    _handler: Closure<dyn Fn(web_sys::HashChangeEvent)>,
}

thread_local! {
    static HASHCHANGE_BINDING: RefCell<Option<HashChangeBinding>> = const { RefCell::new(None) };
}

/// Tab named by the current location hash.
pub fn current_tab() -> Tab {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Tab::from_hash(&hash))
        .unwrap_or(Tab::Welcome)
}

/// Activate `tab` and mirror it in the URL. The welcome tab clears the hash
/// without adding a history entry.
pub fn navigate(tab: Tab, active: RwSignal<Tab>) {
    if let Some(window) = web_sys::window() {
        if tab == Tab::Welcome {
            if let (Ok(history), Ok(path)) = (window.history(), window.location().pathname()) {
                let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
            }
        } else {
            let _ = window.location().set_hash(tab.id());
        }
    }
    active.set(tab);
    reset_scroll();
}

/// Follow back/forward and direct hash links.
pub fn bind_hash_navigation(active: RwSignal<Tab>) {
    let Some(window) = web_sys::window() else {
        web_sys::console::warn_1(&"hash navigation unavailable: no window".into());
        return;
    };

    unbind_hash_navigation();

    let handler = Closure::<dyn Fn(web_sys::HashChangeEvent)>::new(
        move |_event: web_sys::HashChangeEvent| {
            active.set(current_tab());
            reset_scroll();
        },
    );

    if window
        .add_event_listener_with_callback("hashchange", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        HASHCHANGE_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(HashChangeBinding {
                window: window.clone(),
                _handler: handler,
            });
        });
    }
}

pub fn unbind_hash_navigation() {
    HASHCHANGE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.window.remove_event_listener_with_callback(
                "hashchange",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });
}

/// Scroll to top now and once more after the browser's own hash jump.
fn reset_scroll() {
    scroll_to_top();
    Timeout::new(config::SCROLL_RESET_DELAY_MS, scroll_to_top).forget();
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
