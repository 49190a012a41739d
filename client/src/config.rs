/// Roster worker endpoint. Override at build time with `ALLIANCE_ROSTER_URL`.
pub const DEFAULT_ROSTER_URL: &str = "https://throbbing-night-83f1.gf9mkqbtwv.workers.dev";

/// Host-page global another script may already have filled with the roster payload.
pub const SHARED_ROSTER_GLOBAL: &str = "allianceRosterData";

pub const MOUNT_ELEMENT_ID: &str = "app";

/// Second scroll reset after hash navigation, once the browser has jumped.
pub const SCROLL_RESET_DELAY_MS: u32 = 10;

pub fn roster_url() -> &'static str {
    option_env!("ALLIANCE_ROSTER_URL")
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_ROSTER_URL)
}

/// How often the "Last updated" age is recomputed.
pub const AGE_TICK_MS: u32 = 30_000;
