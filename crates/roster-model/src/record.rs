use crate::error::{RecordError, Result};

/// The exact header fields a roster CSV must open with, in order.
pub const ROSTER_HEADER: [&str; 4] = ["lastname", "firstname", "group", "extension"];

/// One validated roster line: a person to provision an account for.
///
/// Immutable once parsed; values are kept exactly as they appear in the
/// source file (case folding and space replacement happen later, when
/// usernames and group names are derived).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    pub last_name: String,
    pub first_name: String,
    pub group: String,
    pub extension: String,
}

impl RosterRecord {
    /// Builds a record from the split fields of one data line.
    ///
    /// This is the explicit per-line parse: anything other than exactly
    /// four fields is a recoverable error the caller reports and skips.
    pub fn from_fields(fields: &[String]) -> Result<Self> {
        let [last_name, first_name, group, extension] = fields else {
            return Err(RecordError::FieldCount {
                found: fields.len(),
            });
        };
        Ok(Self {
            last_name: last_name.clone(),
            first_name: first_name.clone(),
            group: group.clone(),
            extension: extension.clone(),
        })
    }
}
