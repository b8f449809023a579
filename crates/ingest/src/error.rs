use core_types::Month;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the level of a whole month source.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Month source for {month} could not be opened at {path}: {source}")]
    SourceUnavailable {
        month: Month,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No source registered for {0}")]
    MissingSource(Month),

    #[error("Reading the {month} source failed after {lines} lines: {source}")]
    Read {
        month: Month,
        lines: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a single line is dropped. None of these stop ingestion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("day '{0}' is not an integer")]
    InvalidDay(String),

    #[error("day {0} is outside 1-28")]
    DayOutOfRange(i64),

    #[error("unknown commodity '{0}'")]
    UnknownCommodity(String),

    #[error("profit '{0}' is not an integer")]
    InvalidProfit(String),
}
