//! System user and group database reads.
//!
//! Both files share the standard layout: line-oriented, colon-delimited,
//! with the account or group name as the first field. Only the names are
//! kept; everything after the first colon is ignored.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use roster_model::SystemState;

use crate::error::{IngestError, Result};
use crate::roster_csv::SkippedLine;

/// Locations of the user and group database files.
///
/// The environment lookup that substitutes local fixtures for the real
/// system paths belongs to the CLI layer; this reader only ever sees
/// explicit paths.
#[derive(Debug, Clone)]
pub struct SystemDbPaths {
    pub passwd: PathBuf,
    pub group: PathBuf,
}

impl SystemDbPaths {
    /// The real system databases.
    pub fn system() -> Self {
        Self {
            passwd: PathBuf::from("/etc/passwd"),
            group: PathBuf::from("/etc/group"),
        }
    }

    /// Fixture files named `passwd` and `group` in the working directory.
    pub fn local() -> Self {
        Self {
            passwd: PathBuf::from("passwd"),
            group: PathBuf::from("group"),
        }
    }
}

/// Result of one names-database pass.
#[derive(Debug, Clone, Default)]
pub struct NamesLoad {
    pub names: BTreeSet<String>,
    pub skipped: Vec<SkippedLine>,
}

/// Result of reading both system databases.
#[derive(Debug, Clone, Default)]
pub struct SystemStateLoad {
    pub state: SystemState,
    pub skipped_users: Vec<SkippedLine>,
    pub skipped_groups: Vec<SkippedLine>,
}

/// Reads a colon-delimited database, keeping the first field of each line.
///
/// A line without a colon is reported and skipped; so is a line that
/// cannot be read at all. Only a file that cannot be opened is fatal.
pub fn read_names_db(path: &Path) -> Result<NamesLoad> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut load = NamesLoad::default();
    for (index, line) in reader.lines().enumerate() {
        let number = index as u64 + 1;
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                warn!(line = number, "unable to read line in {}: {error}", path.display());
                load.skipped.push(SkippedLine {
                    line: number,
                    content: String::new(),
                    reason: error.to_string(),
                });
                continue;
            }
        };
        match line.split_once(':') {
            Some((name, _rest)) => {
                load.names.insert(name.to_string());
            }
            None => {
                warn!(
                    line = number,
                    content = %line,
                    "unable to parse line in {}: missing ':' delimiter",
                    path.display()
                );
                load.skipped.push(SkippedLine {
                    line: number,
                    content: line,
                    reason: "missing ':' delimiter".to_string(),
                });
            }
        }
    }

    debug!(names = ?load.names, "read {}", path.display());
    Ok(load)
}

/// Reads the user and group databases into name sets.
///
/// Each file is opened, fully consumed, and closed before the next read
/// begins.
pub fn load_system_state(paths: &SystemDbPaths) -> Result<SystemStateLoad> {
    let users = read_names_db(&paths.passwd)?;
    let groups = read_names_db(&paths.group)?;
    info!(
        users = users.names.len(),
        groups = groups.names.len(),
        "read system users from {} and groups from {}",
        paths.passwd.display(),
        paths.group.display()
    );
    Ok(SystemStateLoad {
        state: SystemState::new(users.names, groups.names),
        skipped_users: users.skipped,
        skipped_groups: groups.skipped,
    })
}
