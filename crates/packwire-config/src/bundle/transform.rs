use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::bundle::helpers::default_true;

/// Babel options shared by the F# and JavaScript rules
///
/// Serializes in Babel's own shape: presets and plugins are
/// `[name, options]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BabelOptions {
    #[serde(default)]
    pub presets: Vec<PresetEntry>,

    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
}

impl BabelOptions {
    /// ES2015 syntax with module syntax left intact, shared runtime helpers,
    /// no polyfill and no regenerator injection.
    ///
    /// Polyfills are loaded by the page from a CDN script tag, so the runtime
    /// transform must not inject them.
    pub fn shared() -> Self {
        Self {
            presets: vec![PresetEntry(
                Preset::Es2015,
                PresetOptions {
                    modules: ModuleTransform::Preserve,
                },
            )],
            plugins: vec![PluginEntry(
                Plugin::TransformRuntime,
                RuntimeOptions {
                    helpers: true,
                    polyfill: false,
                    regenerator: false,
                },
            )],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    #[serde(rename = "es2015")]
    Es2015,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEntry(pub Preset, pub PresetOptions);

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetOptions {
    #[serde(default)]
    pub modules: ModuleTransform,
}

/// What the ES2015 preset does with `import`/`export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleTransform {
    /// Leave module syntax for the bundler (`false`)
    Preserve,
    #[default]
    CommonJs,
    Amd,
    Umd,
    SystemJs,
}

impl ModuleTransform {
    const NAMES: &'static [&'static str] = &["commonjs", "amd", "umd", "systemjs"];

    fn name(self) -> Option<&'static str> {
        match self {
            ModuleTransform::Preserve => None,
            ModuleTransform::CommonJs => Some("commonjs"),
            ModuleTransform::Amd => Some("amd"),
            ModuleTransform::Umd => Some("umd"),
            ModuleTransform::SystemJs => Some("systemjs"),
        }
    }
}

impl Serialize for ModuleTransform {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for ModuleTransform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = ModuleTransform;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("false or a module format name")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Self::Value, E> {
                if value {
                    Err(E::invalid_value(de::Unexpected::Bool(true), &self))
                } else {
                    Ok(ModuleTransform::Preserve)
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
                match value {
                    "commonjs" => Ok(ModuleTransform::CommonJs),
                    "amd" => Ok(ModuleTransform::Amd),
                    "umd" => Ok(ModuleTransform::Umd),
                    "systemjs" => Ok(ModuleTransform::SystemJs),
                    other => Err(E::unknown_variant(other, ModuleTransform::NAMES)),
                }
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plugin {
    #[serde(rename = "transform-runtime")]
    TransformRuntime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry(pub Plugin, pub RuntimeOptions);

/// Options of Babel's runtime transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeOptions {
    /// Import helpers from the runtime instead of inlining them
    #[serde(default = "default_true")]
    pub helpers: bool,

    /// Alias built-ins to core-js
    #[serde(default = "default_true")]
    pub polyfill: bool,

    /// Inject the generator runtime
    #[serde(default = "default_true")]
    pub regenerator: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            helpers: true,
            polyfill: true,
            regenerator: true,
        }
    }
}

/// Options of the F# to JavaScript loader
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FableOptions {
    /// Babel pass applied to the compiler output
    #[serde(default)]
    pub babel: BabelOptions,

    /// Conditional compilation symbols
    #[serde(default)]
    pub define: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shared_options_serialize_in_babel_shape() {
        assert_eq!(
            serde_json::to_value(BabelOptions::shared()).unwrap(),
            json!({
                "presets": [["es2015", { "modules": false }]],
                "plugins": [["transform-runtime", {
                    "helpers": true,
                    "polyfill": false,
                    "regenerator": false
                }]]
            })
        );
    }

    #[test]
    fn module_transform_accepts_false_and_names() {
        let preserve: ModuleTransform = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(preserve, ModuleTransform::Preserve);

        let umd: ModuleTransform = serde_json::from_value(json!("umd")).unwrap();
        assert_eq!(umd, ModuleTransform::Umd);
    }

    #[test]
    fn module_transform_rejects_true_and_unknown_names() {
        assert!(serde_json::from_value::<ModuleTransform>(json!(true)).is_err());
        assert!(serde_json::from_value::<ModuleTransform>(json!("esm")).is_err());
    }

    #[test]
    fn runtime_options_default_to_babel_defaults() {
        let options: RuntimeOptions = serde_json::from_value(json!({ "polyfill": false })).unwrap();
        assert!(options.helpers);
        assert!(!options.polyfill);
        assert!(options.regenerator);
    }

    #[test]
    fn runtime_options_reject_unknown_keys() {
        let result = serde_json::from_value::<RuntimeOptions>(json!({ "corejs": 2 }));
        assert!(result.is_err());
    }

    #[test]
    fn fable_options_reject_unknown_keys() {
        let result = serde_json::from_value::<FableOptions>(json!({ "defines": ["DEBUG"] }));
        assert!(result.is_err());
    }
}
