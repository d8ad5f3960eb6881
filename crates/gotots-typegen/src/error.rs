//! Errors for a generation run.

use crate::input::ParseError;
use std::path::PathBuf;

/// Anything that stops a generation run. None of these are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input directory not set")]
    MissingInput,

    #[error("output file not set")]
    MissingOutput,

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to walk directory {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
