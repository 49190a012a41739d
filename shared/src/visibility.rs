use std::collections::HashMap;

/// Merge-derived columns, hidden until the user opts in.
pub const TOURNAMENT_COLUMNS: [&str; 5] = ["bracket", "score", "tasks", "activeTask", "position"];

pub fn is_tournament_column(column: &str) -> bool {
    TOURNAMENT_COLUMNS.contains(&column)
}

/// Per-column visibility for the page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    columns: HashMap<String, bool>,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnVisibility {
    pub fn new() -> Self {
        let columns = TOURNAMENT_COLUMNS
            .iter()
            .map(|column| (column.to_string(), false))
            .collect();
        Self { columns }
    }

    /// Register columns seen in a fresh roster. Known columns keep their state.
    pub fn observe<'a>(&mut self, columns: impl IntoIterator<Item = &'a str>) {
        for column in columns {
            self.columns
                .entry(column.to_string())
                .or_insert_with(|| !is_tournament_column(column));
        }
    }

    pub fn is_visible(&self, column: &str) -> bool {
        self.columns
            .get(column)
            .copied()
            .unwrap_or_else(|| !is_tournament_column(column))
    }

    pub fn is_known(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn set_visible(&mut self, column: &str, visible: bool) {
        self.columns.insert(column.to_string(), visible);
    }

    /// Umbrella toggle: show or hide every tournament column together.
    pub fn set_tournament_visible(&mut self, visible: bool) {
        for column in TOURNAMENT_COLUMNS {
            self.columns.insert(column.to_string(), visible);
        }
    }

    pub fn tournament_visible(&self) -> bool {
        TOURNAMENT_COLUMNS
            .iter()
            .all(|column| self.is_visible(column))
    }
}
