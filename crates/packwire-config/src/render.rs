//! Rendering a [`BuildConfig`] for the bundler.
//!
//! `to_js_module` produces a `webpack.config.js` body. JSON cannot carry
//! regular expressions, so the values under `test` and `exclude` keys are
//! written as regex literals there. `to_json` keeps them as strings and is
//! meant for inspection.

use serde_json::Value;

use crate::bundle::BuildConfig;
use crate::error::{ConfigError, Result};

const PATTERN_KEYS: &[&str] = &["test", "exclude"];
const INDENT: &str = "  ";

pub fn to_json(config: &BuildConfig) -> Result<String> {
    serde_json::to_string_pretty(config).map_err(serialize_error)
}

/// Render `module.exports = {...};` for the bundler to load.
pub fn to_js_module(config: &BuildConfig) -> Result<String> {
    let value = serde_json::to_value(config).map_err(serialize_error)?;
    let mut out = String::from("module.exports = ");
    write_value(&mut out, &value, 0, None);
    out.push_str(";\n");
    Ok(out)
}

/// Render a JSON value as a JavaScript expression.
///
/// # Example
///
/// ```
/// use packwire_config::render::render_js_value;
/// use serde_json::json;
///
/// let js = render_js_value(&json!({ "test": r"\.js$", "port": 8080 }));
/// assert_eq!(js, "{\n  test: /\\.js$/,\n  port: 8080\n}");
/// ```
pub fn render_js_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, None);
    out
}

fn serialize_error(e: serde_json::Error) -> ConfigError {
    ConfigError::InvalidValue {
        field: "config".to_string(),
        message: e.to_string(),
    }
}

fn write_value(out: &mut String, value: &Value, depth: usize, key: Option<&str>) {
    match value {
        Value::String(source) if key.is_some_and(|key| PATTERN_KEYS.contains(&key)) => {
            out.push('/');
            out.push_str(&escape_regex_literal(source));
            out.push('/');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (index, (name, item)) in map.iter().enumerate() {
                indent(out, depth + 1);
                out.push_str(&js_key(name));
                out.push_str(": ");
                write_value(out, item, depth + 1, Some(name));
                if index + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, depth);
            out.push('}');
        }
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (index, item) in items.iter().enumerate() {
                indent(out, depth + 1);
                write_value(out, item, depth + 1, None);
                if index + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, depth);
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Bare identifier keys stay unquoted; anything else is a JSON string.
fn js_key(name: &str) -> String {
    let mut chars = name.chars();
    let identifier = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if identifier {
        name.to_string()
    } else {
        Value::String(name.to_string()).to_string()
    }
}

/// Escape unescaped `/` so the source fits between literal delimiters.
fn escape_regex_literal(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len());
    let mut backslash = false;
    for c in source.chars() {
        if c == '/' && !backslash {
            escaped.push('\\');
        }
        escaped.push(c);
        backslash = c == '\\' && !backslash;
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_values_render_with_indentation() {
        let js = render_js_value(&json!({
            "devServer": {
                "port": 8080,
                "proxy": { "/api/*": { "target": "http://localhost:8085", "changeOrigin": true } }
            }
        }));

        let expected = r#"{
  devServer: {
    port: 8080,
    proxy: {
      "/api/*": {
        target: "http://localhost:8085",
        changeOrigin: true
      }
    }
  }
}"#;
        assert_eq!(js, expected);
    }

    #[test]
    fn pattern_keys_render_as_regex_literals() {
        let js = render_js_value(&json!({
            "rules": [{ "test": r"\.(?:fs|fsx|fsproj)$", "exclude": "node_modules" }]
        }));
        assert!(js.contains(r"test: /\.(?:fs|fsx|fsproj)$/,"));
        assert!(js.contains("exclude: /node_modules/\n"));
    }

    #[test]
    fn patterns_only_apply_to_strings() {
        let js = render_js_value(&json!({ "test": ["a"] }));
        assert_eq!(js, "{\n  test: [\n    \"a\"\n  ]\n}");
    }

    #[test]
    fn empty_collections_render_inline() {
        assert_eq!(render_js_value(&json!({ "define": [], "x": {} })), "{\n  define: [],\n  x: {}\n}");
    }

    #[test]
    fn regex_slashes_are_escaped_once() {
        assert_eq!(escape_regex_literal("vendor/lib"), r"vendor\/lib");
        assert_eq!(escape_regex_literal(r"vendor\/lib"), r"vendor\/lib");
        assert_eq!(escape_regex_literal(r"a\\/b"), r"a\\\/b");
    }

    #[test]
    fn non_identifier_keys_are_quoted() {
        assert_eq!(js_key("contentBase"), "contentBase");
        assert_eq!(js_key("/api/*"), "\"/api/*\"");
        assert_eq!(js_key("1st"), "\"1st\"");
    }
}
