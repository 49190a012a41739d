use std::collections::HashMap;

use crate::payload::TournamentEntry;
use crate::record::{CellValue, Player};

/// Placeholder row the tournament sheet emits when it has no data.
pub const NO_DATA_SENTINEL: &str = "No items.";

pub type TournamentFields = [(&'static str, CellValue); 5];

/// Index tournament rows by trimmed name. Later duplicates replace earlier ones.
pub fn tournament_index(tournaments: &[TournamentEntry]) -> HashMap<String, TournamentFields> {
    tournaments
        .iter()
        .filter_map(|entry| {
            let name = entry.trimmed_name();
            if name.is_empty() || name == NO_DATA_SENTINEL {
                return None;
            }
            Some((name, entry.fields()))
        })
        .collect()
}

/// Join tournament columns onto players by exact trimmed display name.
///
/// Matched players get every tournament column (tournament values win on key
/// collision); unmatched players keep only their roster columns.
pub fn merge_tournaments(players: &[Player], tournaments: &[TournamentEntry]) -> Vec<Player> {
    if tournaments.is_empty() {
        return players.to_vec();
    }
    let index = tournament_index(tournaments);

    players
        .iter()
        .map(|player| {
            let name = player.display_name();
            let Some(fields) = index.get(name.trim()) else {
                return player.clone();
            };
            let mut merged = player.clone();
            for (key, value) in fields {
                merged.insert(*key, value.clone());
            }
            merged
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{merge_tournaments, tournament_index};
    use crate::payload::TournamentEntry;
    use crate::record::{CellValue, Player};
    use serde_json::json;

    fn players(value: serde_json::Value) -> Vec<Player> {
        serde_json::from_value(value).expect("players should parse")
    }

    fn tournaments(value: serde_json::Value) -> Vec<TournamentEntry> {
        serde_json::from_value(value).expect("tournaments should parse")
    }

    #[test]
    fn matched_player_gets_tournament_columns() {
        let roster = players(json!([{ "Name": "Ann" }]));
        let sheet = tournaments(json!([{ "Name": "Ann", "Score": "5" }]));

        let merged = merge_tournaments(&roster, &sheet);
        let expected = players(json!([{
            "Name": "Ann",
            "bracket": "",
            "score": "5",
            "tasks": "",
            "activeTask": "",
            "position": ""
        }]));
        assert_eq!(merged, expected);
    }

    #[test]
    fn unmatched_players_keep_roster_columns_only() {
        let roster = players(json!([{ "Name": "Ann" }, { "Name": "Bob", "Rank": "Premier" }]));
        let sheet = tournaments(json!([{ "Name": "Ann", "Score": "5" }]));

        let merged = merge_tournaments(&roster, &sheet);
        assert_eq!(merged[0].len(), 6);
        assert_eq!(merged[1], roster[1]);
    }

    #[test]
    fn matches_on_trimmed_names_and_alternate_name_keys() {
        let roster = players(json!([{ "Player": " Cy " }]));
        let sheet = tournaments(json!([{ "Name": "Cy  ", "Position": 3 }]));

        let merged = merge_tournaments(&roster, &sheet);
        assert_eq!(merged[0].get("position"), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn match_is_case_sensitive() {
        let roster = players(json!([{ "Name": "ann" }]));
        let sheet = tournaments(json!([{ "Name": "Ann", "Score": "5" }]));

        let merged = merge_tournaments(&roster, &sheet);
        assert!(merged[0].get("score").is_none());
    }

    #[test]
    fn tournament_values_win_on_collision() {
        let roster = players(json!([{ "Name": "Ann", "score": "old", "Rank": "Admiral" }]));
        let sheet = tournaments(json!([{ "Name": "Ann", "Score": "new" }]));

        let merged = merge_tournaments(&roster, &sheet);
        let keys: Vec<&str> = merged[0].keys().collect();
        assert_eq!(
            keys,
            vec!["Name", "score", "Rank", "bracket", "tasks", "activeTask", "position"]
        );
        assert_eq!(merged[0].get("score"), Some(&CellValue::text("new")));
    }

    #[test]
    fn skips_sentinel_rows_and_keeps_last_duplicate() {
        let sheet = tournaments(json!([
            { "Name": "No items.", "Score": "1" },
            { "Name": "Ann", "Score": "1" },
            { "Name": "Ann", "Score": "2" },
            { "Score": "nameless" }
        ]));

        let index = tournament_index(&sheet);
        assert_eq!(index.len(), 1);
        assert_eq!(index["Ann"][1].1, CellValue::text("2"));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let roster = players(json!([{ "Name": "Ann" }]));
        let snapshot = roster.clone();
        let sheet = tournaments(json!([{ "Name": "Ann", "Score": "5" }]));

        let _ = merge_tournaments(&roster, &sheet);
        assert_eq!(roster, snapshot);
        assert_eq!(merge_tournaments(&roster, &[]), roster);
    }
}
