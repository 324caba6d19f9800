//! Roster CSV loading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{info, warn};

use roster_model::{ROSTER_HEADER, RosterRecord};

use crate::error::{IngestError, Result};

/// A line rejected during ingestion, kept for diagnostics and summaries.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    /// 1-based line number in the source file.
    pub line: u64,
    /// The offending content.
    pub content: String,
    /// Free-text reason reported to the error channel.
    pub reason: String,
}

/// Result of loading a roster file.
#[derive(Debug, Clone, Default)]
pub struct RosterLoad {
    /// Successfully parsed records, in file order.
    pub records: Vec<RosterRecord>,
    /// Data lines that failed the per-line parse.
    pub skipped: Vec<SkippedLine>,
}

/// Reads a roster CSV into validated records.
///
/// Fatal (the whole run aborts): the file does not exist, or the first
/// line is not exactly `lastname,firstname,group,extension`. Recoverable
/// (reported and skipped, parsing continues): a data line that does not
/// split into exactly four fields.
pub fn read_roster(path: &Path) -> Result<RosterLoad> {
    if !path.is_file() {
        return Err(IngestError::RosterNotFound {
            path: path.to_path_buf(),
        });
    }

    // Quoting disabled and flexible field counts: a data line is exactly a
    // naive comma split, matching the fixed roster format (no embedded
    // commas, no quoting).
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = reader.records();
    let header = match rows.next() {
        Some(Ok(record)) => record,
        Some(Err(source)) => {
            return Err(IngestError::Csv {
                path: path.to_path_buf(),
                source,
            });
        }
        None => {
            return Err(IngestError::MissingHeader {
                path: path.to_path_buf(),
            });
        }
    };
    if !header.iter().eq(ROSTER_HEADER) {
        return Err(IngestError::HeaderMismatch {
            path: path.to_path_buf(),
            found: header.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut load = RosterLoad::default();
    for row in rows {
        match row {
            Ok(record) => {
                let line = record.position().map_or(0, |p| p.line());
                let fields: Vec<String> = record.iter().map(String::from).collect();
                match RosterRecord::from_fields(&fields) {
                    Ok(parsed) => load.records.push(parsed),
                    Err(error) => {
                        let content = fields.join(",");
                        warn!(line, content = %content, "unable to parse roster line: {error}");
                        load.skipped.push(SkippedLine {
                            line,
                            content,
                            reason: error.to_string(),
                        });
                    }
                }
            }
            Err(error) => {
                let line = error.position().map_or(0, |p| p.line());
                warn!(line, "unable to read roster line: {error}");
                load.skipped.push(SkippedLine {
                    line,
                    content: String::new(),
                    reason: error.to_string(),
                });
            }
        }
    }

    info!(
        records = load.records.len(),
        skipped = load.skipped.len(),
        "found {} user records in {}",
        load.records.len(),
        path.display()
    );
    Ok(load)
}
