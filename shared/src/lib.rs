pub mod command;
pub mod leaver;
pub mod merge;
pub mod normalize;
pub mod number;
pub mod payload;
pub mod record;
pub mod session;
pub mod sort;
pub mod table;
pub mod visibility;

pub use command::CommandRoster;
pub use leaver::{LeaverIndex, is_leaver};
pub use merge::{NO_DATA_SENTINEL, merge_tournaments};
pub use normalize::normalize_name;
pub use number::parse_formatted_number;
pub use payload::{Leaver, RosterPayload, TournamentEntry};
pub use record::{CellValue, Player, Record};
pub use session::{LeaverNotice, LoadSummary, RosterSession, RosterSnapshot};
pub use sort::{SortState, compare_cells, sort_players};
pub use table::{TableError, TableModel};
pub use visibility::{ColumnVisibility, TOURNAMENT_COLUMNS};
