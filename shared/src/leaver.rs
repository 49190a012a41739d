use std::collections::HashSet;

use crate::normalize::normalize_name;
use crate::payload::Leaver;
use crate::record::Player;

/// Whether `player` appears in the leaver list, ignoring case, accents,
/// surrounding whitespace and punctuation.
pub fn is_leaver(player: &Player, leavers: &[Leaver]) -> bool {
    let name = normalize_name(&player.display_name());
    leavers
        .iter()
        .any(|leaver| normalize_name(&leaver.name()) == name)
}

/// Normalized leaver names, built once per table render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaverIndex {
    names: HashSet<String>,
}

impl LeaverIndex {
    pub fn new(leavers: &[Leaver]) -> Self {
        let names = leavers
            .iter()
            .map(|leaver| normalize_name(&leaver.name()))
            .collect();
        Self { names }
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.names
            .contains(&normalize_name(&player.display_name()))
    }

    /// Normalized names in sorted order, for logging.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
