//! Error handling for the packwire CLI.
//!
//! `CliError` wraps the configuration crate's `ConfigError` and adds the
//! failures that only happen at the command line: a missing project root
//! and output I/O.

use std::path::PathBuf;

use thiserror::Error;

pub use packwire_config::ConfigError;

pub mod miette;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Layout, assembly or validation errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for attaching the offending path to I/O failures.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `CliError::FileNotFound` for `path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use packwire_cli::error::{Result, ResultExt};
    /// # fn run() -> Result<()> {
    /// let path = Path::new("packwire.toml");
    /// std::fs::read_to_string(path).with_path(path)?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_from_config_error() {
        let config_err = ConfigError::LayoutNotFound {
            path: PathBuf::from("packwire.toml"),
        };
        let cli_err: CliError = config_err.into();
        assert!(matches!(cli_err, CliError::Config(_)));
        assert!(cli_err.to_string().contains("packwire.toml"));
    }

    #[test]
    fn test_overlapping_rules_message() {
        let err = ConfigError::OverlappingRules {
            first: "babel-loader".to_string(),
            second: "fable-loader".to_string(),
            extension: "js".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "rules 'babel-loader' and 'fable-loader' both match .js files"
        );
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/path.txt").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(path) if path == PathBuf::from("/test/path.txt")));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/test/path.txt").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
