use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("roster file not found: {path}")]
    RosterNotFound { path: PathBuf },

    #[error("{path}: missing header line")]
    MissingHeader { path: PathBuf },

    #[error("{path}: not a roster file (expected header \"lastname,firstname,group,extension\", found \"{found}\")")]
    HeaderMismatch { path: PathBuf, found: String },

    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
