//! Project layout: the path fragments and literals the assembler works from.
//!
//! The defaults describe the conventional client layout (an F# project under
//! `src/Client`, bundles written to `public/`, an API backend on port 8085).
//! A `packwire.toml` may override any field; see [`crate::LayoutLoader`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_PROXY_PORT_ENV: &str = "SUAVE_FABLE_PORT";
pub const DEFAULT_PROXY_PORT: &str = "8085";
pub const DEFAULT_DEV_SERVER_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectLayout {
    /// Entry file, relative to the project root
    pub entry: PathBuf,

    /// Output directory, relative to the project root
    pub output_dir: PathBuf,

    pub output_filename: String,

    /// Local dependency directory searched during module resolution
    pub dependency_dir: PathBuf,

    /// Directory the dev server serves statically
    pub content_base: PathBuf,

    /// Dev-server listening port. Not read from the environment.
    pub dev_server_port: u16,

    /// URL pattern forwarded to the API backend
    pub proxy_prefix: String,

    pub proxy_host: String,

    /// Environment variable holding the API backend port
    pub proxy_port_env: String,

    /// Backend port used when `proxy_port_env` is unset or empty
    pub default_proxy_port: String,

    /// Symbols defined for the F# compiler in development builds
    pub debug_defines: Vec<String>,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            entry: PathBuf::from("./src/Client/Client.fsproj"),
            output_dir: PathBuf::from("./public"),
            output_filename: "bundle.js".to_string(),
            dependency_dir: PathBuf::from("node_modules"),
            content_base: PathBuf::from("./public"),
            dev_server_port: DEFAULT_DEV_SERVER_PORT,
            proxy_prefix: "/api/*".to_string(),
            proxy_host: "localhost".to_string(),
            proxy_port_env: DEFAULT_PROXY_PORT_ENV.to_string(),
            default_proxy_port: DEFAULT_PROXY_PORT.to_string(),
            debug_defines: vec!["DEBUG".to_string()],
        }
    }
}

impl ProjectLayout {
    /// Render the layout as `packwire.toml` content.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "layout".to_string(),
            message: e.to_string(),
        })
    }
}
