use alliance_shared::RosterPayload;
use wasm_bindgen::JsValue;

use crate::config;

/// A shared payload is only worth reusing when it has players.
fn reusable(shared: Option<RosterPayload>) -> Option<RosterPayload> {
    shared.filter(RosterPayload::is_populated)
}

/// Non-2xx statuses are errors regardless of body.
fn decode_response(ok: bool, status: u16, body: &str) -> Result<RosterPayload, String> {
    if !ok {
        return Err(format!("HTTP {status}"));
    }
    RosterPayload::from_json(body)
}

fn payload_or_empty(fetched: Result<RosterPayload, String>) -> RosterPayload {
    fetched.unwrap_or_else(|_| RosterPayload::empty())
}

/// Roster payload another page script already fetched into
/// `window.allianceRosterData`, when it has players.
pub fn host_payload() -> Option<RosterPayload> {
    let window = web_sys::window()?;
    let value =
        js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(config::SHARED_ROSTER_GLOBAL))
            .ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<RosterPayload>(value) {
        Ok(payload) => reusable(Some(payload)),
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Ignoring malformed {}: {e}", config::SHARED_ROSTER_GLOBAL).into(),
            );
            None
        }
    }
}

/// Fetch the roster payload from the worker endpoint.
pub async fn fetch_roster(url: &str) -> Result<RosterPayload, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    let ok = resp.ok();
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| format!("read error: {e}"))?;
    decode_response(ok, status, &body)
}

/// Reuse `shared` when it is populated, otherwise fetch once. Failures are
/// logged and yield an empty payload; there is no retry.
pub async fn get_roster_data(shared: Option<RosterPayload>) -> RosterPayload {
    if let Some(payload) = reusable(shared) {
        web_sys::console::log_1(&"Using shared roster data; skipping fetch".into());
        return payload;
    }

    web_sys::console::log_1(&"Shared roster data not available, fetching independently...".into());
    let fetched = fetch_roster(config::roster_url()).await;
    if let Err(e) = &fetched {
        web_sys::console::error_1(&format!("Error fetching roster: {e}").into());
    }
    payload_or_empty(fetched)
}
