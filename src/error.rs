use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while validating or running a split.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("unsupported chunk unit in '{0}': supported prefixes are \"k\", \"m\" and \"g\"")]
    InvalidChunkUnit(String),

    #[error("invalid chunk size '{0}': expected whole digits with an optional k/m/g suffix")]
    InvalidChunkFormat(String),

    #[error("invalid chunk size '{0}': must resolve to between 1 and u64::MAX bytes")]
    InvalidChunkSize(String),

    #[error("quiet and verbose cannot be used together")]
    ConflictingFlags,

    #[error("output path exists and is not a directory: {}", .0.display())]
    InvalidOutputPath(PathBuf),

    #[error("input path has no file name: {}", .0.display())]
    InvalidInputPath(PathBuf),

    #[error("input path is a directory: {}", .0.display())]
    InputIsDirectory(PathBuf),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        SplitError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
