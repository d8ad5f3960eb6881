//! Configuration system for gotots.
//!
//! Loads config from:
//! 1. Global: ~/.config/gotots/config.toml
//! 2. Per-project: .gotots/config.toml, or the `--config` file (overrides global)
//!
//! Command-line flags override both.
//!
//! Example config.toml:
//! ```toml
//! [generate]
//! dir = "internal/models"
//! output = "web/src/types.ts"
//! ```

use gotots_typegen::Error;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// `[generate]` section.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GenerateSection {
    /// Directory scanned for Go files.
    pub dir: Option<PathBuf>,
    /// TypeScript file to write.
    pub output: Option<PathBuf>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GototsConfig {
    pub generate: GenerateSection,
}

impl GototsConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/gotots/config.toml,
    /// then merges with per-project config from .gotots/config.toml.
    pub fn load(root: &Path) -> Self {
        Self::load_layers(
            Self::global_config_path().as_deref(),
            &root.join(".gotots").join("config.toml"),
        )
    }

    /// Merge an optional global file and a project file, project winning.
    pub fn load_layers(global: Option<&Path>, project: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global) = global.and_then(Self::load_file) {
            config = config.merge(global);
        }

        if let Some(project) = Self::load_file(project) {
            config = config.merge(project);
        }

        config
    }

    /// Load the global config with an explicitly named file over it.
    pub fn load_explicit(path: &Path) -> Result<Self, Error> {
        Self::load_layers_explicit(Self::global_config_path().as_deref(), path)
    }

    /// Like [`Self::load_layers`], but the top layer must load.
    pub fn load_layers_explicit(global: Option<&Path>, explicit: &Path) -> Result<Self, Error> {
        let base = global.and_then(Self::load_file).unwrap_or_default();
        Ok(base.merge(Self::read_explicit(explicit)?))
    }

    /// Read a file the user named explicitly; failures are errors here.
    fn read_explicit(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("gotots").join("config.toml"))
    }

    /// Load config from a file path. Missing files are silent, broken ones warn.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Values set in `other` win; unset values fall back to `self`.
    fn merge(self, other: Self) -> Self {
        Self {
            generate: GenerateSection {
                dir: other.generate.dir.or(self.generate.dir),
                output: other.generate.output.or(self.generate.output),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = std::fs::File::create(path).unwrap();
        writeln!(file, "{}", content).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = GototsConfig::default();
        assert_eq!(config.generate.dir, None);
        assert_eq!(config.generate.output, None);
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global").join("config.toml");
        let project = dir.path().join(".gotots").join("config.toml");

        write_config(
            &global,
            r#"
[generate]
dir = "global/models"
output = "global.ts"
"#,
        );
        write_config(
            &project,
            r#"
[generate]
output = "web/types.ts"
"#,
        );

        let config = GototsConfig::load_layers(Some(&global), &project);
        assert_eq!(config.generate.dir, Some(PathBuf::from("global/models")));
        assert_eq!(config.generate.output, Some(PathBuf::from("web/types.ts")));
    }

    #[test]
    fn test_load_project_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(".gotots").join("config.toml"),
            r#"
[generate]
dir = "models"
"#,
        );

        let project = dir.path().join(".gotots").join("config.toml");
        let config = GototsConfig::load_layers(None, &project);
        assert_eq!(config.generate.dir, Some(PathBuf::from("models")));
        assert_eq!(config.generate.output, None);
    }

    #[test]
    fn test_invalid_layer_is_ignored() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join(".gotots").join("config.toml");
        write_config(&project, "[generate\ndir = ");

        let config = GototsConfig::load_layers(None, &project);
        assert_eq!(config, GototsConfig::default());
    }

    #[test]
    fn test_explicit_config_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = GototsConfig::load_layers_explicit(None, &missing).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let broken = dir.path().join("broken.toml");
        write_config(&broken, "generate = 3");
        let err = GototsConfig::load_layers_explicit(None, &broken).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_explicit_config_layers_over_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global").join("config.toml");
        let explicit = dir.path().join("custom.toml");

        write_config(
            &global,
            r#"
[generate]
dir = "global/models"
output = "global.ts"
"#,
        );
        write_config(
            &explicit,
            r#"
[generate]
output = "custom.ts"
"#,
        );

        let config = GototsConfig::load_layers_explicit(Some(&global), &explicit).unwrap();
        assert_eq!(config.generate.dir, Some(PathBuf::from("global/models")));
        assert_eq!(config.generate.output, Some(PathBuf::from("custom.ts")));
    }
}
