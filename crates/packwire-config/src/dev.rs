//! Development server configuration types.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    /// Directory served statically
    pub content_base: PathBuf,

    pub port: u16,

    /// URL pattern to upstream, in declaration order
    pub proxy: IndexMap<String, ProxyRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    /// Upstream origin, e.g. `http://localhost:8085`
    pub target: String,

    /// Rewrite the `Origin` header to match the target
    pub change_origin: bool,
}

impl ProxyRule {
    /// Proxy to `http://{host}:{port}` with origin rewriting.
    ///
    /// `port` is used verbatim.
    pub fn http(host: &str, port: &str) -> Self {
        Self {
            target: format!("http://{host}:{port}"),
            change_origin: true,
        }
    }
}
