use chrono::{DateTime, Utc};

use crate::command::CommandRoster;
use crate::leaver::LeaverIndex;
use crate::merge::{merge_tournaments, tournament_index};
use crate::payload::{Leaver, RosterPayload};
use crate::record::Player;
use crate::sort::{SortState, sort_players};
use crate::table::{TableError, TableModel};
use crate::visibility::ColumnVisibility;

/// Merged roster as of one successful load. Replaced wholesale on the next.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSnapshot {
    pub players: Vec<Player>,
    pub leavers: Vec<Leaver>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub players: usize,
    pub tournament_entries: usize,
    pub leavers: usize,
}

/// Dismissible notice listing members who left or were renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaverNotice {
    pub names: Vec<String>,
}

impl LeaverNotice {
    pub fn new(leavers: &[Leaver]) -> Self {
        Self {
            names: leavers.iter().map(Leaver::notice_name).collect(),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "\u{1F6A8} {} Member(s) Left/Changed Names: {}",
            self.names.len(),
            self.names.join(", ")
        )
    }
}

/// All roster state for one page session: the loaded snapshot, the working
/// (sorted) player order, leavers, column visibility and sort state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterSession {
    snapshot: Option<RosterSnapshot>,
    players: Vec<Player>,
    leavers: Vec<Leaver>,
    leaver_index: LeaverIndex,
    visibility: ColumnVisibility,
    sort: SortState,
    notice: Option<LeaverNotice>,
    notice_issued: bool,
}

impl RosterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take in a fetched payload.
    ///
    /// Leavers are cached even when the roster is empty; an empty roster
    /// leaves the previous players in place and reports `NoPlayers`.
    pub fn load(
        &mut self,
        payload: RosterPayload,
        fetched_at: DateTime<Utc>,
    ) -> Result<LoadSummary, TableError> {
        if !payload.leavers.is_empty() {
            self.leavers = payload.leavers.clone();
            self.leaver_index = LeaverIndex::new(&self.leavers);
            if !self.notice_issued {
                self.notice = Some(LeaverNotice::new(&self.leavers));
            }
        }

        let Some(first) = payload.players.first() else {
            return Err(TableError::NoPlayers);
        };
        self.visibility.observe(first.keys());

        let merged = merge_tournaments(&payload.players, &payload.tournaments);
        if let Some(first) = merged.first() {
            self.visibility.observe(first.keys());
        }

        let summary = LoadSummary {
            players: merged.len(),
            tournament_entries: tournament_index(&payload.tournaments).len(),
            leavers: self.leavers.len(),
        };

        self.players = merged.clone();
        if let Some(column) = self.sort.column.clone() {
            sort_players(&mut self.players, &column, self.sort.ascending);
        }
        self.snapshot = Some(RosterSnapshot {
            players: merged,
            leavers: self.leavers.clone(),
            fetched_at,
        });

        Ok(summary)
    }

    /// Hand out the leaver notice once per session.
    pub fn take_leaver_notice(&mut self) -> Option<LeaverNotice> {
        let notice = self.notice.take();
        if notice.is_some() {
            self.notice_issued = true;
        }
        notice
    }

    pub fn sort_by(&mut self, column: &str) {
        self.sort.toggle(column);
        sort_players(&mut self.players, column, self.sort.ascending);
    }

    pub fn set_visible(&mut self, column: &str, visible: bool) {
        self.visibility.set_visible(column, visible);
    }

    pub fn set_tournament_visible(&mut self, visible: bool) {
        self.visibility.set_tournament_visible(visible);
    }

    pub fn table(&self) -> Result<TableModel, TableError> {
        TableModel::build(
            &self.players,
            &self.visibility,
            &self.leaver_index,
            &self.sort,
        )
    }

    pub fn command_roster(&self) -> CommandRoster {
        self.snapshot
            .as_ref()
            .map(|snapshot| CommandRoster::from_players(&snapshot.players))
            .unwrap_or_else(|| CommandRoster::from_players(&[]))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn leavers(&self) -> &[Leaver] {
        &self.leavers
    }

    pub fn normalized_leaver_names(&self) -> Vec<&str> {
        self.leaver_index.sorted_names()
    }

    pub fn snapshot(&self) -> Option<&RosterSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn visibility(&self) -> &ColumnVisibility {
        &self.visibility
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }
}
