//! Roster ingestion: CSV loading and system user/group database reads.

pub mod error;
pub mod names_db;
pub mod roster_csv;

pub use error::{IngestError, Result};
pub use names_db::{
    NamesLoad, SystemDbPaths, SystemStateLoad, load_system_state, read_names_db,
};
pub use roster_csv::{RosterLoad, SkippedLine, read_roster};
