//! Writing the generated file.

use gotots_typegen::{Error, GenerateConfig};

/// Write the rendered TypeScript to the configured output file.
///
/// Missing parent directories are created.
pub fn write_output(config: &GenerateConfig, contents: &str) -> Result<(), Error> {
    let path = config.output_file();
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, contents).map_err(to_error)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
