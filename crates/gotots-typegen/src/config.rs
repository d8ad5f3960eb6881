//! Settings for one generation run.

use crate::error::Error;
use std::path::{Path, PathBuf};

/// Where to read Go sources from and where the TypeScript goes.
///
/// Built once and never mutated; both paths are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    input_dir: PathBuf,
    output_file: PathBuf,
}

impl GenerateConfig {
    /// Validate both paths before any I/O happens.
    pub fn new(input_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Result<Self, Error> {
        let input_dir = input_dir.into();
        let output_file = output_file.into();

        if input_dir.as_os_str().is_empty() {
            return Err(Error::MissingInput);
        }
        if output_file.as_os_str().is_empty() {
            return Err(Error::MissingOutput);
        }

        Ok(Self {
            input_dir,
            output_file,
        })
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}
