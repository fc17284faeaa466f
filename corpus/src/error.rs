//! Errors raised while ingesting a corpus directory.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Debug, Error)]
pub enum CorpusError {
    /// The input path is missing, unreadable, or not a directory.
    #[error("cannot read corpus directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading one of the selected files failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line is not a valid document record, even after escape repair.
    #[error("malformed record at {path}:{line}: {source}")]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A line is not valid UTF-8, so it cannot be a record either.
    #[error("line {line} of {path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
