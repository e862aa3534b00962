//! Pluggable config validation strategies
//!
//! Rule disjointness is enforced when the rule list is built; the validators
//! below add schema checks and, for CLI use, filesystem checks.

use tracing::debug;

use crate::bundle::{BuildConfig, ModuleRule};
use crate::error::{ConfigError, Result};

/// Fail if any two rules could claim the same file.
///
/// Two checks per pair: the extension sets must not intersect, and no probe
/// file of one rule may match the other rule's regex (this catches suffix
/// overlap such as `min.js` against `js`).
pub fn check_disjoint(rules: &[ModuleRule]) -> Result<()> {
    for (index, first) in rules.iter().enumerate() {
        for second in &rules[index + 1..] {
            let shared = first
                .test
                .extensions()
                .iter()
                .find(|extension| second.test.extensions().contains(*extension));
            if let Some(extension) = shared {
                return Err(overlap(first, second, extension));
            }

            for (extension, probe) in first.test.probes() {
                if second.test.is_match(&probe) {
                    return Err(overlap(first, second, extension));
                }
            }
            for (extension, probe) in second.test.probes() {
                if first.test.is_match(&probe) {
                    return Err(overlap(first, second, extension));
                }
            }
        }
    }

    Ok(())
}

fn overlap(first: &ModuleRule, second: &ModuleRule, extension: &str) -> ConfigError {
    ConfigError::OverlappingRules {
        first: first.label(),
        second: second.label(),
        extension: extension.to_string(),
    }
}

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use packwire_config::{Assembler, ConfigValidator, InvocationSnapshot, SchemaValidator};
///
/// let config = Assembler::new("/srv/app")
///     .assemble(&InvocationSnapshot::default())
///     .unwrap();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        check_disjoint(config.module.rules())?;

        if !config.entry.is_absolute() {
            return Err(invalid("entry", "entry path must be absolute"));
        }

        if !config.output.path.is_absolute() {
            return Err(invalid("output.path", "output directory must be absolute"));
        }

        if config.output.filename.trim().is_empty() {
            return Err(invalid("output.filename", "bundle filename cannot be empty"));
        }

        if config.resolve.modules.is_empty() {
            return Err(invalid(
                "resolve.modules",
                "at least one module search path is required",
            ));
        }

        for prefix in config.dev_server.proxy.keys() {
            if !prefix.starts_with('/') {
                return Err(invalid(
                    "devServer.proxy",
                    &format!("proxy pattern '{prefix}' must start with '/'"),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks that the entry file and the absolute module search paths exist.
/// Assembly never does this itself; the bundler would report the same
/// problems later.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        if !config.entry.is_file() {
            return Err(ConfigError::EntryNotFound {
                path: config.entry.clone(),
            });
        }

        for dir in config.resolve.modules.iter().filter(|dir| dir.is_absolute()) {
            debug!("checking module search path {}", dir.display());
            if !dir.is_dir() {
                return Err(ConfigError::DependencyDirNotFound { path: dir.clone() });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig) -> Result<()> {
    FsValidator.validate(config)
}
