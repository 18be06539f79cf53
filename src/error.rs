use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// All the ways report conversion can fail
#[derive(Debug, Error)]
pub enum EicError {
    /// The report file could not be opened or read
    #[error("failed to read report {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A scan line whose retention time field was not numeric
    #[error("malformed scan record: {0}")]
    MalformedRecord(String),
    /// The output table could not be created or written
    #[error("failed to write table {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl EicError {
    /// Attach a 1-based line number to a malformed record error, leaving
    /// other variants untouched.
    pub(crate) fn at_line(self, line: u64) -> Self {
        match self {
            Self::MalformedRecord(msg) => Self::MalformedRecord(format!("line {line}: {msg}")),
            other => other,
        }
    }
}

pub type EicResult<T> = Result<T, EicError>;
