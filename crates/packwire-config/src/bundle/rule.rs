use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::pattern::{ExtensionPattern, PathPattern};
use crate::bundle::transform::{BabelOptions, FableOptions};
use crate::error::{ConfigError, Result};

pub const FABLE_LOADER: &str = "fable-loader";
pub const BABEL_LOADER: &str = "babel-loader";

/// A single loader with typed options, serialized as `{ loader, options }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", content = "options")]
pub enum LoaderUse {
    /// F# to JavaScript
    #[serde(rename = "fable-loader")]
    Fable(FableOptions),

    /// JavaScript syntax downleveling
    #[serde(rename = "babel-loader")]
    Babel(BabelOptions),
}

impl LoaderUse {
    /// Type an untyped `(loader, options)` pair.
    ///
    /// # Errors
    ///
    /// Unknown loader names and unknown option keys are rejected with
    /// `ConfigError::InvalidLoaderOptions`.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire_config::LoaderUse;
    /// use serde_json::json;
    ///
    /// let fable = LoaderUse::from_parts("fable-loader", json!({ "define": ["DEBUG"] })).unwrap();
    /// assert_eq!(fable.name(), "fable-loader");
    ///
    /// assert!(LoaderUse::from_parts("fable-loader", json!({ "defines": [] })).is_err());
    /// ```
    pub fn from_parts(loader: &str, options: Value) -> Result<Self> {
        let invalid = |message: String| ConfigError::InvalidLoaderOptions {
            loader: loader.to_string(),
            message,
        };

        match loader {
            FABLE_LOADER => serde_json::from_value(options)
                .map(LoaderUse::Fable)
                .map_err(|e| invalid(e.to_string())),
            BABEL_LOADER => serde_json::from_value(options)
                .map(LoaderUse::Babel)
                .map_err(|e| invalid(e.to_string())),
            _ => Err(invalid(format!(
                "unknown loader (expected {FABLE_LOADER} or {BABEL_LOADER})"
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoaderUse::Fable(_) => FABLE_LOADER,
            LoaderUse::Babel(_) => BABEL_LOADER,
        }
    }
}

/// Option-less loaders of the stylesheet chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleLoader {
    /// Injects CSS into the page
    #[serde(rename = "style-loader")]
    Style,
    /// Resolves `@import` and `url()`
    #[serde(rename = "css-loader")]
    Css,
    /// Sass to CSS
    #[serde(rename = "sass-loader")]
    Sass,
}

impl StyleLoader {
    /// Sass chain in bundler order; the bundler applies it last to first.
    pub fn sass_chain() -> Vec<StyleLoader> {
        vec![StyleLoader::Style, StyleLoader::Css, StyleLoader::Sass]
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleLoader::Style => "style-loader",
            StyleLoader::Css => "css-loader",
            StyleLoader::Sass => "sass-loader",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleUse {
    Loader(LoaderUse),
    Chain(Vec<StyleLoader>),
}

/// One transform rule: which files, minus which paths, through which loaders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRule {
    pub test: ExtensionPattern,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<PathPattern>,

    #[serde(rename = "use")]
    pub uses: RuleUse,
}

impl ModuleRule {
    pub fn new(test: ExtensionPattern, uses: impl Into<RuleUse>) -> Self {
        Self {
            test,
            exclude: None,
            uses: uses.into(),
        }
    }

    pub fn excluding(mut self, exclude: PathPattern) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Whether the bundler would run this rule on `path`.
    pub fn applies_to(&self, path: &str) -> bool {
        self.test.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(path))
    }

    /// Loader names joined with `!`, e.g. `style-loader!css-loader!sass-loader`.
    pub fn label(&self) -> String {
        match &self.uses {
            RuleUse::Loader(loader) => loader.name().to_string(),
            RuleUse::Chain(chain) => chain
                .iter()
                .map(|loader| loader.name())
                .collect::<Vec<_>>()
                .join("!"),
        }
    }
}

impl From<LoaderUse> for RuleUse {
    fn from(loader: LoaderUse) -> Self {
        RuleUse::Loader(loader)
    }
}

impl From<Vec<StyleLoader>> for RuleUse {
    fn from(chain: Vec<StyleLoader>) -> Self {
        RuleUse::Chain(chain)
    }
}
