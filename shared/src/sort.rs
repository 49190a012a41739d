use std::cmp::Ordering;

use crate::normalize::fold_for_collation;
use crate::number::parse_formatted_number;
use crate::record::{CellValue, Player};

/// Active sort column and direction. Not persisted across reloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<String>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortState {
    /// Same column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column.to_string());
            self.ascending = true;
        }
    }

    /// Direction for `column` when it is the active sort column.
    pub fn direction_of(&self, column: &str) -> Option<bool> {
        (self.column.as_deref() == Some(column)).then_some(self.ascending)
    }
}

/// Numeric-aware cell comparison.
///
/// Both sides are read as formatted numbers (missing cells read as 0). If
/// either is nonzero the numbers decide. Otherwise two text cells compare by
/// collation and anything else is equal.
pub fn compare_cells(a: Option<&CellValue>, b: Option<&CellValue>, ascending: bool) -> Ordering {
    let a_num = a.map_or(0.0, parse_formatted_number);
    let b_num = b.map_or(0.0, parse_formatted_number);

    let ordering = if a_num != 0.0 || b_num != 0.0 {
        a_num.total_cmp(&b_num)
    } else {
        match (a, b) {
            (Some(CellValue::Text(a)), Some(CellValue::Text(b))) => collate(a, b),
            _ => return Ordering::Equal,
        }
    };

    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Locale-style text ordering: accent- and case-insensitive first, then
/// unaccented before accented, then lowercase before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold_for_collation(a)
        .cmp(&fold_for_collation(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Stable in-place sort of `players` by `column`.
///
/// `compare_cells` is not a total order on mixed text/number columns, and
/// `slice::sort_by` may panic on such comparators, so this is an insertion sort.
pub fn sort_players(players: &mut [Player], column: &str, ascending: bool) {
    for i in 1..players.len() {
        let mut j = i;
        while j > 0
            && compare_cells(players[j - 1].get(column), players[j].get(column), ascending)
                == Ordering::Greater
        {
            players.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SortState, collate, compare_cells, sort_players};
    use crate::record::{CellValue, Player};
    use std::cmp::Ordering;

    fn rows(column: &str, values: &[&str]) -> Vec<Player> {
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                [
                    ("Name", CellValue::text(format!("p{idx}"))),
                    (column, CellValue::text(*value)),
                ]
                .into_iter()
                .collect()
            })
            .collect()
    }

    fn column_values(players: &[Player], column: &str) -> Vec<String> {
        players
            .iter()
            .map(|p| p.get(column).map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn score_sorts_by_magnitude_and_toggles() {
        let mut players = rows("score", &["1K", "2M", "500"]);
        let mut state = SortState::default();

        state.toggle("score");
        sort_players(&mut players, "score", state.ascending);
        assert_eq!(column_values(&players, "score"), vec!["500", "1K", "2M"]);

        state.toggle("score");
        assert!(!state.ascending);
        sort_players(&mut players, "score", state.ascending);
        assert_eq!(column_values(&players, "score"), vec!["2M", "1K", "500"]);
    }

    #[test]
    fn new_column_resets_to_ascending() {
        let mut state = SortState::default();
        state.toggle("score");
        state.toggle("score");
        state.toggle("Name");
        assert_eq!(state.column.as_deref(), Some("Name"));
        assert!(state.ascending);
        assert_eq!(state.direction_of("Name"), Some(true));
        assert_eq!(state.direction_of("score"), None);
    }

    #[test]
    fn text_columns_use_collation() {
        let mut players = rows("Rank", &["premier", "Admiral", "Élite", "commodore"]);
        sort_players(&mut players, "Rank", true);
        assert_eq!(
            column_values(&players, "Rank"),
            vec!["Admiral", "commodore", "Élite", "premier"]
        );

        sort_players(&mut players, "Rank", false);
        assert_eq!(
            column_values(&players, "Rank"),
            vec!["premier", "Élite", "commodore", "Admiral"]
        );
    }

    #[test]
    fn zero_and_text_compare_equal_and_keep_order() {
        let zero = CellValue::Number(0.0);
        let text = CellValue::text("abc");
        assert_eq!(compare_cells(Some(&zero), Some(&text), true), Ordering::Equal);
        assert_eq!(compare_cells(None, None, false), Ordering::Equal);

        let mut players: Vec<Player> = vec![
            [("Name", CellValue::text("b")), ("x", zero.clone())].into_iter().collect(),
            [("Name", CellValue::text("a")), ("x", text.clone())].into_iter().collect(),
        ];
        sort_players(&mut players, "x", true);
        assert_eq!(column_values(&players, "Name"), vec!["b", "a"]);
    }

    #[test]
    fn missing_cells_sort_as_zero_against_numbers() {
        let mut players = rows("score", &["5", "-2"]);
        players.push([("Name", "p2")].into_iter().collect());
        sort_players(&mut players, "score", true);
        assert_eq!(column_values(&players, "score"), vec!["-2", "", "5"]);
    }

    #[test]
    fn sorting_is_stable_for_equal_values() {
        let mut players = rows("tasks", &["3", "1", "3", "1"]);
        sort_players(&mut players, "tasks", true);
        assert_eq!(column_values(&players, "Name"), vec!["p1", "p3", "p0", "p2"]);
    }

    #[test]
    fn collation_breaks_ties_deterministically() {
        assert_eq!(collate("ann", "Ann"), Ordering::Less);
        assert_eq!(collate("e", "é"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }
}
