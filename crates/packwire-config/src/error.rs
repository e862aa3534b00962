//! Error types for configuration assembly, layout loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Rule construction errors
    #[error("rules '{first}' and '{second}' both match .{extension} files")]
    OverlappingRules {
        first: String,
        second: String,
        extension: String,
    },

    #[error("extension pattern must list at least one non-empty extension")]
    EmptyExtensionSet,

    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("invalid options for {loader}: {message}")]
    InvalidLoaderOptions { loader: String, message: String },

    #[error("invalid config value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    // Layout loading errors
    #[error("layout file not found: {}", .path.display())]
    LayoutNotFound { path: PathBuf },

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("dependency directory not found: {}", .path.display())]
    DependencyDirNotFound { path: PathBuf },
}
