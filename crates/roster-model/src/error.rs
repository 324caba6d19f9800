use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 4 comma-separated fields, found {found}")]
    FieldCount { found: usize },
}

pub type Result<T> = std::result::Result<T, RecordError>;
