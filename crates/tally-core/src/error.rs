//! Error types for graph construction, aggregation and input loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by `tally-core`. None of them are recovered internally.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A name was looked up that has no node.
    #[error("unknown name: {0:?}")]
    UnknownName(String),

    /// A component total does not fit in a `u64`.
    #[error("frequency overflow while summing component of {0:?}")]
    FrequencyOverflow(String),

    /// The input document could not be parsed.
    #[error("invalid input: {0}")]
    Input(String),

    /// The input file extension is not one we can parse.
    #[error("unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GraphError {
    pub fn unknown_name(name: impl Into<String>) -> Self {
        GraphError::UnknownName(name.into())
    }

    pub fn input<S: Into<String>>(msg: S) -> Self {
        GraphError::Input(msg.into())
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::Input(err.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Input(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
