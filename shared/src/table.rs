use std::fmt;

use crate::leaver::LeaverIndex;
use crate::number::parse_formatted_number;
use crate::record::{CellValue, Player};
use crate::sort::SortState;
use crate::visibility::{ColumnVisibility, is_tournament_column};

pub const SCORE_COLUMN: &str = "score";
/// Hand-tuned: 1B of score draws 20px.
pub const SCORE_BAR_PX_PER_BILLION: f64 = 20.0;
pub const SCORE_BAR_MAX_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    NoPlayers,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlayers => f.write_str("no players found"),
        }
    }
}

impl std::error::Error for TableError {}

/// Header text for a column key; merge-derived keys get readable labels.
pub fn header_label(column: &str) -> &str {
    match column {
        "bracket" => "Bracket",
        "score" => "Score",
        "tasks" => "Tasks",
        "activeTask" => "Active Task",
        "position" => "Position",
        other => other,
    }
}

/// Pixel width of the score bar for a score cell.
pub fn score_bar_width(value: &CellValue) -> f64 {
    (parse_formatted_number(value) / 1e9 * SCORE_BAR_PX_PER_BILLION).min(SCORE_BAR_MAX_PX)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnModel {
    pub key: String,
    pub label: String,
    pub visible: bool,
    /// `Some(ascending)` when this is the active sort column.
    pub sorted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleModel {
    pub column: String,
    pub label: String,
    pub checked: bool,
    pub tournament: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellModel {
    pub column: String,
    pub text: String,
    pub score_bar_px: Option<f64>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub name: String,
    pub is_leaver: bool,
    pub cells: Vec<CellModel>,
}

/// Everything the roster table needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub columns: Vec<ColumnModel>,
    pub toggles: Vec<ToggleModel>,
    pub tournament_toggle: bool,
    pub rows: Vec<RowModel>,
}

impl TableModel {
    /// Build from the players in their current order. Columns come from the
    /// first player's keys.
    pub fn build(
        players: &[Player],
        visibility: &ColumnVisibility,
        leavers: &LeaverIndex,
        sort: &SortState,
    ) -> Result<Self, TableError> {
        let first = players.first().ok_or(TableError::NoPlayers)?;
        let keys: Vec<&str> = first.keys().collect();

        let columns = keys
            .iter()
            .map(|key| ColumnModel {
                key: key.to_string(),
                label: header_label(key).to_string(),
                visible: visibility.is_visible(key),
                sorted: sort.direction_of(key),
            })
            .collect();

        let toggles = keys
            .iter()
            .map(|key| ToggleModel {
                column: key.to_string(),
                label: header_label(key).to_string(),
                checked: visibility.is_visible(key),
                tournament: is_tournament_column(key),
            })
            .collect();

        let rows = players
            .iter()
            .map(|player| RowModel {
                name: player.display_name(),
                is_leaver: leavers.contains(player),
                cells: keys
                    .iter()
                    .map(|key| build_cell(player, key, visibility))
                    .collect(),
            })
            .collect();

        Ok(Self {
            columns,
            toggles,
            tournament_toggle: visibility.tournament_visible(),
            rows,
        })
    }

    pub fn leaver_rows(&self) -> impl Iterator<Item = &RowModel> {
        self.rows.iter().filter(|row| row.is_leaver)
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &ColumnModel> {
        self.columns.iter().filter(|column| column.visible)
    }
}

fn build_cell(player: &Player, key: &str, visibility: &ColumnVisibility) -> CellModel {
    let value = player.get(key);
    let score_bar_px = value
        .filter(|value| key == SCORE_COLUMN && value.is_truthy())
        .map(score_bar_width);
    CellModel {
        column: key.to_string(),
        text: value.map(ToString::to_string).unwrap_or_default(),
        score_bar_px,
        visible: visibility.is_visible(key),
    }
}
