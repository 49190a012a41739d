use serde::{Deserialize, Deserializer, Serialize};

use crate::record::{CellValue, Player, Record};

/// Key spellings accepted for a leaver's name, in lookup order.
pub const LEAVER_NAME_KEYS: [&str; 4] = ["name", "Name", "Player", "PLAYER"];

/// Body returned by the roster endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RosterPayload {
    #[serde(default, deserialize_with = "nullable_vec")]
    pub players: Vec<Player>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tournaments: Vec<TournamentEntry>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub leavers: Vec<Leaver>,
}

impl RosterPayload {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A payload worth reusing instead of fetching again.
    pub fn is_populated(&self) -> bool {
        !self.players.is_empty()
    }

    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("parse error: {e}"))
    }
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of the tournament sheet, keyed by the player's display name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TournamentEntry {
    #[serde(rename = "Name", default)]
    pub name: Option<CellValue>,
    #[serde(rename = "Bracket", default)]
    pub bracket: Option<CellValue>,
    #[serde(rename = "Score", default)]
    pub score: Option<CellValue>,
    #[serde(rename = "Tasks", default)]
    pub tasks: Option<CellValue>,
    #[serde(rename = "Active Task", default)]
    pub active_task: Option<CellValue>,
    #[serde(rename = "Position", default)]
    pub position: Option<CellValue>,
}

impl TournamentEntry {
    pub fn trimmed_name(&self) -> String {
        self.name
            .as_ref()
            .map(|name| name.to_string().trim().to_string())
            .unwrap_or_default()
    }

    /// Merge-ready fields under the table's column keys. Missing or empty
    /// values become empty text so every matched player gets the same columns.
    pub fn fields(&self) -> [(&'static str, CellValue); 5] {
        [
            ("bracket", or_empty(&self.bracket)),
            ("score", or_empty(&self.score)),
            ("tasks", or_empty(&self.tasks)),
            ("activeTask", or_empty(&self.active_task)),
            ("position", or_empty(&self.position)),
        ]
    }
}

fn or_empty(value: &Option<CellValue>) -> CellValue {
    value
        .as_ref()
        .filter(|value| value.is_truthy())
        .cloned()
        .unwrap_or_else(CellValue::empty)
}

/// A member who left or changed name since the previous sheet export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaver(pub Record);

impl Leaver {
    pub fn named(name: &str) -> Self {
        Self([("name", name)].into_iter().collect())
    }

    pub fn name(&self) -> String {
        self.0.first_text(&LEAVER_NAME_KEYS).unwrap_or_default()
    }

    /// Name as shown in the departure notice.
    pub fn notice_name(&self) -> String {
        self.0
            .first_text(&LEAVER_NAME_KEYS[..3])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Leaver, RosterPayload};
    use crate::record::CellValue;
    use serde_json::json;

    #[test]
    fn parses_full_payload() {
        let raw = json!({
            "players": [{ "Name": "Ann", "Rank": "Admiral" }],
            "tournaments": [{ "Name": " Ann ", "Score": "2M", "Active Task": "Build", "Extra": 1 }],
            "leavers": [{ "Player": "Bob" }]
        })
        .to_string();

        let payload = RosterPayload::from_json(&raw).expect("payload should parse");
        assert_eq!(payload.players.len(), 1);
        assert_eq!(payload.tournaments[0].trimmed_name(), "Ann");
        assert_eq!(
            payload.tournaments[0].active_task,
            Some(CellValue::text("Build"))
        );
        assert_eq!(payload.leavers[0].name(), "Bob");
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let payload = RosterPayload::from_json(r#"{"players": [], "tournaments": null}"#)
            .expect("payload should parse");
        assert!(payload.tournaments.is_empty());
        assert!(payload.leavers.is_empty());
        assert!(!payload.is_populated());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RosterPayload::from_json("<html>").is_err());
        assert!(RosterPayload::from_json(r#"{"players": ["Ann"]}"#).is_err());
    }

    #[test]
    fn tournament_fields_default_to_empty_text() {
        let payload = RosterPayload::from_json(
            &json!({ "tournaments": [{ "Name": "Ann", "Score": "5", "Tasks": 0 }] }).to_string(),
        )
        .expect("payload should parse");

        let fields = payload.tournaments[0].fields();
        assert_eq!(fields[0], ("bracket", CellValue::empty()));
        assert_eq!(fields[1], ("score", CellValue::text("5")));
        assert_eq!(fields[2], ("tasks", CellValue::empty()));
        assert_eq!(fields[3].0, "activeTask");
    }

    #[test]
    fn leaver_name_spellings() {
        let lower: Leaver = serde_json::from_value(json!({ "name": "Cy", "Name": "Other" }))
            .expect("leaver should parse");
        assert_eq!(lower.name(), "Cy");

        let shouty: Leaver =
            serde_json::from_value(json!({ "PLAYER": "Dee" })).expect("leaver should parse");
        assert_eq!(shouty.name(), "Dee");
        assert_eq!(shouty.notice_name(), "");
    }
}
