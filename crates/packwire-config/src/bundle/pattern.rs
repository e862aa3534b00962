//! File patterns used by module rules.
//!
//! Both kinds keep their compiled [`Regex`] and serialize to its source text,
//! which is valid for JavaScript's `RegExp` as well.

use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// Matches files by extension: `\.(?:fs|fsx|fsproj)$`
///
/// Rule tests are always extension sets so that overlap between rules can be
/// decided before the bundler runs.
#[derive(Clone)]
pub struct ExtensionPattern {
    extensions: Vec<String>,
    regex: Regex,
}

impl ExtensionPattern {
    /// Build a pattern from extensions, with or without a leading dot.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire_config::ExtensionPattern;
    ///
    /// let fsharp = ExtensionPattern::new(["fs", ".fsx", "fsproj"]).unwrap();
    /// assert_eq!(fsharp.as_str(), r"\.(?:fs|fsx|fsproj)$");
    /// assert!(fsharp.is_match("src/Client/Client.fsproj"));
    /// assert!(!fsharp.is_match("src/app.js"));
    /// ```
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for extension in extensions {
            let extension = extension.as_ref().trim_start_matches('.');
            if extension.is_empty() {
                return Err(ConfigError::EmptyExtensionSet);
            }
            if !unique.iter().any(|seen| seen == extension) {
                unique.push(extension.to_string());
            }
        }

        if unique.is_empty() {
            return Err(ConfigError::EmptyExtensionSet);
        }

        let alternatives = unique
            .iter()
            .map(|extension| regex::escape(extension))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(r"\.(?:{alternatives})$");
        let regex = Regex::new(&source).map_err(|e| ConfigError::InvalidPattern {
            pattern: source.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            extensions: unique,
            regex,
        })
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// One sample file name per extension, paired with its extension.
    pub fn probes(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.extensions
            .iter()
            .map(|extension| (extension.as_str(), format!("probe.{extension}")))
    }
}

/// Free-form path pattern, used for rule exclusions
#[derive(Clone)]
pub struct PathPattern {
    regex: Regex,
}

impl PathPattern {
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
            pattern: source.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// Match any path containing `segment` literally.
    pub fn literal(segment: &str) -> Result<Self> {
        Self::new(&regex::escape(segment))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

macro_rules! pattern_impls {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $ty {}

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "/{}/", self.as_str())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

pattern_impls!(ExtensionPattern);
pattern_impls!(PathPattern);
