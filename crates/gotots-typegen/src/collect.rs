//! Directory scanning.
//!
//! Visits every `.go` file under a root (sorted by file name, so output is
//! stable across runs) and appends its structs to one collection.

use crate::error::Error;
use crate::input::parse_go_types;
use crate::ir::AggregatedCollection;
use std::path::Path;
use walkdir::WalkDir;

pub const SOURCE_SUFFIX: &str = ".go";
pub const TEST_SUFFIX: &str = "_test.go";

/// Whether a file name is a Go source file that contributes declarations.
pub fn is_collected_file(file_name: &str) -> bool {
    file_name.ends_with(SOURCE_SUFFIX) && !file_name.ends_with(TEST_SUFFIX)
}

/// Collect every struct declared under `root`.
///
/// Fails on the first unreadable entry or unparseable file.
pub fn collect_dir(root: &Path) -> Result<AggregatedCollection, Error> {
    let mut collection = AggregatedCollection::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::Walk { path, source: e }
        })?;

        // Symlinked files count; symlinked directories are not descended.
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !file_name.ends_with(SOURCE_SUFFIX) {
            continue;
        }
        if !is_collected_file(&file_name) {
            tracing::debug!(path = %path.display(), "skipping test file");
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file_result = parse_go_types(&content).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(
            path = %path.display(),
            records = file_result.records.len(),
            "extracted structs"
        );
        collection.extend(file_result);
    }

    Ok(collection)
}
