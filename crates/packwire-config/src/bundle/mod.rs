//! The build configuration handed to the bundler.

mod helpers;
mod pattern;
mod rule;
mod transform;
mod types;

use std::path::PathBuf;

use serde::Serialize;

pub use pattern::{ExtensionPattern, PathPattern};
pub use rule::{LoaderUse, ModuleRule, RuleUse, StyleLoader, BABEL_LOADER, FABLE_LOADER};
pub use transform::{
    BabelOptions, FableOptions, ModuleTransform, Plugin, PluginEntry, Preset, PresetEntry,
    PresetOptions, RuntimeOptions,
};
pub use types::Devtool;

use crate::dev::DevServerConfig;
use crate::error::Result;
use crate::mode::Mode;
use crate::validation::check_disjoint;

/// Complete, immutable build configuration
///
/// Serializes with the bundler's key names (`devServer`, `contentBase`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Selects the debug defines; the bundler's schema has no `mode` key
    #[serde(skip_serializing)]
    pub mode: Mode,

    /// Source map policy (always a full map)
    pub devtool: Devtool,

    /// Absolute path of the entry file
    pub entry: PathBuf,

    pub output: OutputConfig,

    pub resolve: ResolveConfig,

    pub dev_server: DevServerConfig,

    pub module: ModuleConfig,
}

impl BuildConfig {
    /// Debug symbols passed to the F# loader, empty in production.
    pub fn debug_defines(&self) -> &[String] {
        self.module
            .rules()
            .iter()
            .find_map(|rule| match &rule.uses {
                RuleUse::Loader(LoaderUse::Fable(options)) => Some(options.define.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    /// Absolute output directory
    pub path: PathBuf,

    pub filename: String,
}

impl OutputConfig {
    /// Absolute path of the emitted bundle
    pub fn bundle_path(&self) -> PathBuf {
        self.path.join(&self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveConfig {
    /// Directories searched for imports, in order
    pub modules: Vec<PathBuf>,
}

/// Ordered transform rules with pairwise-disjoint file patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleConfig {
    rules: Vec<ModuleRule>,
}

impl ModuleConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::OverlappingRules` if two rules could match the
    /// same file.
    pub fn new(rules: Vec<ModuleRule>) -> Result<Self> {
        check_disjoint(&rules)?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[ModuleRule] {
        &self.rules
    }

    /// The rule the bundler would apply to `path`, if any.
    pub fn rule_for(&self, path: &str) -> Option<&ModuleRule> {
        self.rules.iter().find(|rule| rule.applies_to(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn rule(extensions: &[&str]) -> ModuleRule {
        ModuleRule::new(
            ExtensionPattern::new(extensions).unwrap(),
            StyleLoader::sass_chain(),
        )
    }

    #[test]
    fn module_config_accepts_disjoint_rules() {
        let module = ModuleConfig::new(vec![rule(&["fs", "fsx"]), rule(&["sass"])]).unwrap();
        assert_eq!(module.rules().len(), 2);
        assert!(module.rule_for("Client.fsx").is_some());
        assert!(module.rule_for("style.css").is_none());
    }

    #[test]
    fn module_config_rejects_overlap() {
        let result = ModuleConfig::new(vec![rule(&["fs", "fsx"]), rule(&["fsx"])]);
        assert!(matches!(
            result,
            Err(ConfigError::OverlappingRules { extension, .. }) if extension == "fsx"
        ));
    }

    #[test]
    fn bundle_path_joins_filename() {
        let output = OutputConfig {
            path: PathBuf::from("/srv/app/public"),
            filename: "bundle.js".to_string(),
        };
        assert_eq!(output.bundle_path(), PathBuf::from("/srv/app/public/bundle.js"));
    }
}
