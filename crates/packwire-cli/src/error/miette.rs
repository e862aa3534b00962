//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, with a hint where one helps
pub fn config_error_to_miette(err: ConfigError) -> Report {
    let hint = match &err {
        ConfigError::OverlappingRules { .. } => {
            Some("Give every transform rule its own set of file extensions")
        }
        ConfigError::LayoutNotFound { .. } => {
            Some("Create packwire.toml in the project root or pass --layout <FILE>")
        }
        ConfigError::EntryNotFound { .. } => {
            Some("Check `entry` in packwire.toml or pass --root <DIR>")
        }
        ConfigError::DependencyDirNotFound { .. } => {
            Some("Install the JavaScript dependencies (npm install) before bundling")
        }
        ConfigError::InvalidLoaderOptions { .. } => {
            Some("Only the documented loader options are accepted")
        }
        _ => None,
    };

    match hint {
        Some(hint) => miette::miette!(help = hint, "Configuration error: {}", err),
        None => miette::miette!("Configuration error: {}", err),
    }
}
