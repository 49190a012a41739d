mod app;
mod command_panel;
mod config;
mod fetch;
mod leaver_alert;
mod roster_table;
mod tabs;
mod time_format;

use leptos::mount::mount_to;
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

thread_local! {
    static APP_MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        web_sys::console::warn_1(&"dashboard not mounted: no window".into());
        return;
    };
    let Some(document) = window.document() else {
        web_sys::console::warn_1(&"dashboard not mounted: no document".into());
        return;
    };
    let mount_target = document
        .get_element_by_id(config::MOUNT_ELEMENT_ID)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = mount_target else {
        web_sys::console::warn_1(&"dashboard not mounted: no mount target".into());
        return;
    };

    APP_MOUNT_HANDLE.with(move |slot| {
        // Drop a previous mount so its effects stop touching the page.
        let _old = slot.borrow_mut().take();
        let handle = mount_to(target, app::App);
        *slot.borrow_mut() = Some(Box::new(handle));
    });
}
