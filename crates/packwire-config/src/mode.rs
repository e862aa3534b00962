//! Build mode detection from the invocation arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Argument that switches the build into production mode.
pub const PRODUCTION_FLAG: &str = "-p";

/// Long spelling of [`PRODUCTION_FLAG`].
pub const PRODUCTION_FLAG_LONG: &str = "--production";

/// Bundling mode, fixed for the lifetime of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No production flag was passed (default)
    #[default]
    Development,
    /// The production flag was passed
    Production,
}

impl Mode {
    /// Derive the mode from an argument list.
    ///
    /// Only whole arguments count; a missing flag is the default, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire_config::Mode;
    ///
    /// assert_eq!(Mode::from_args(&["webpack", "-p"]), Mode::Production);
    /// assert_eq!(Mode::from_args(&["webpack"]), Mode::Development);
    /// ```
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let production = args
            .iter()
            .any(|arg| matches!(arg.as_ref(), PRODUCTION_FLAG | PRODUCTION_FLAG_LONG));

        if production {
            Mode::Production
        } else {
            Mode::Development
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    /// One-line notice announcing which mode is bundling.
    pub fn notice(self) -> String {
        format!("Bundling for {}...", self.as_str())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
