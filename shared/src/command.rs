use crate::record::Player;

pub const RANK_COLUMN: &str = "Rank";
pub const NAME_COLUMN: &str = "Name";
pub const UNFILLED: &str = "TBD";

/// Leadership lines shown on the Command tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandRoster {
    pub admirals: String,
    pub commodores: String,
    pub premiers: String,
}

impl CommandRoster {
    pub fn from_players(players: &[Player]) -> Self {
        Self {
            admirals: names_with_rank(players, "Admiral"),
            commodores: names_with_rank(players, "Commodore"),
            premiers: names_with_rank(players, "Premier"),
        }
    }
}

fn names_with_rank(players: &[Player], rank: &str) -> String {
    let names: Vec<String> = players
        .iter()
        .filter(|player| {
            player
                .get(RANK_COLUMN)
                .and_then(|value| value.as_text())
                == Some(rank)
        })
        .map(|player| {
            player
                .get(NAME_COLUMN)
                .map(ToString::to_string)
                .unwrap_or_default()
        })
        .collect();

    if names.is_empty() {
        UNFILLED.to_string()
    } else {
        names.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::CommandRoster;
    use crate::record::Player;
    use serde_json::json;

    #[test]
    fn groups_names_by_exact_rank() {
        let players: Vec<Player> = serde_json::from_value(json!([
            { "Name": "Ann", "Rank": "Admiral" },
            { "Name": "Bob", "Rank": "Commodore" },
            { "Name": "Cy", "Rank": "Commodore" },
            { "Name": "Dee", "Rank": "admiral" },
            { "Name": "Eve" }
        ]))
        .expect("players should parse");

        let roster = CommandRoster::from_players(&players);
        assert_eq!(roster.admirals, "Ann");
        assert_eq!(roster.commodores, "Bob | Cy");
        assert_eq!(roster.premiers, "TBD");
    }

    #[test]
    fn empty_roster_is_all_tbd() {
        let roster = CommandRoster::from_players(&[]);
        assert_eq!(roster.admirals, "TBD");
        assert_eq!(roster.commodores, "TBD");
        assert_eq!(roster.premiers, "TBD");
    }
}
