//! File-based layout discovery for CLI use
//!
//! Looks for `packwire.toml` in the project root and layers it over the
//! built-in defaults. Environment variables are not a layout source.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;

pub const LAYOUT_FILE: &str = "packwire.toml";

/// File-based layout discovery
///
/// # Example
///
/// ```no_run
/// use packwire_config::LayoutLoader;
///
/// let layout = LayoutLoader::new(".").load().unwrap();
/// ```
pub struct LayoutLoader {
    root: PathBuf,
}

impl LayoutLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find `packwire.toml` in the root directory
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(LAYOUT_FILE);
        path.is_file().then_some(path)
    }

    /// Load the discovered layout, or the defaults when there is none.
    pub fn load(&self) -> Result<ProjectLayout> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                debug!("no {} in {}, using default layout", LAYOUT_FILE, self.root.display());
                Ok(ProjectLayout::default())
            }
        }
    }

    /// Load a specific layout file; relative paths are taken from the root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LayoutNotFound` if the file does not exist and
    /// `ConfigError::InvalidValue` for bad TOML or unknown keys.
    pub fn load_from(&self, path: &Path) -> Result<ProjectLayout> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        if !path.is_file() {
            return Err(ConfigError::LayoutNotFound { path });
        }

        debug!("loading layout from {}", path.display());
        Figment::from(Serialized::defaults(ProjectLayout::default()))
            .merge(Toml::file(&path))
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: "layout".to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_without_layout() {
        let dir = TempDir::new().unwrap();
        assert!(LayoutLoader::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_defaults_without_layout() {
        let dir = TempDir::new().unwrap();
        let layout = LayoutLoader::new(dir.path()).load().unwrap();
        assert_eq!(layout, ProjectLayout::default());
    }

    #[test]
    fn load_overrides_selected_fields() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(LAYOUT_FILE),
            r#"
output_filename = "app.js"
dev_server_port = 3000
"#,
        )
        .unwrap();

        let layout = LayoutLoader::new(dir.path()).load().unwrap();
        assert_eq!(layout.output_filename, "app.js");
        assert_eq!(layout.dev_server_port, 3000);
        assert_eq!(layout.default_proxy_port, "8085");
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let result = LayoutLoader::new(dir.path()).load_from(Path::new("other.toml"));
        assert!(matches!(result, Err(ConfigError::LayoutNotFound { .. })));
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(LAYOUT_FILE), "dev_port = 3000\n").unwrap();

        let result = LayoutLoader::new(dir.path()).load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
