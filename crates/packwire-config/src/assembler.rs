//! Assembles the [`BuildConfig`] from a layout and an invocation snapshot.
//!
//! Assembly is pure: the same root, layout and snapshot always produce the
//! same configuration, and nothing is read from the process or filesystem.

use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::bundle::{
    BabelOptions, BuildConfig, Devtool, ExtensionPattern, FableOptions, LoaderUse, ModuleConfig,
    ModuleRule, OutputConfig, PathPattern, ResolveConfig, StyleLoader,
};
use crate::dev::{DevServerConfig, ProxyRule};
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::mode::Mode;
use crate::paths::resolve;
use crate::snapshot::InvocationSnapshot;

pub const FSHARP_EXTENSIONS: &[&str] = &["fs", "fsx", "fsproj"];
pub const SCRIPT_EXTENSIONS: &[&str] = &["js"];
pub const STYLESHEET_EXTENSIONS: &[&str] = &["sass"];

#[derive(Debug, Clone)]
pub struct Assembler {
    root: PathBuf,
    layout: ProjectLayout,
}

impl Assembler {
    /// Assembler for the default layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout: ProjectLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: ProjectLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Build the full configuration.
    ///
    /// # Errors
    ///
    /// Fails only when the layout's dependency directory names no directory
    /// or the rules overlap; the default layout always assembles.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire_config::{Assembler, InvocationSnapshot, Mode};
    ///
    /// let snapshot = InvocationSnapshot::new(["webpack"], [("SUAVE_FABLE_PORT", "9000")]);
    /// let config = Assembler::new("/srv/app").assemble(&snapshot).unwrap();
    ///
    /// assert_eq!(config.mode, Mode::Development);
    /// assert_eq!(config.dev_server.proxy["/api/*"].target, "http://localhost:9000");
    /// assert_eq!(config.debug_defines(), ["DEBUG"]);
    /// ```
    pub fn assemble(&self, snapshot: &InvocationSnapshot) -> Result<BuildConfig> {
        let layout = &self.layout;
        let mode = snapshot.mode();
        let proxy_port = snapshot.proxy_port(&layout.proxy_port_env, &layout.default_proxy_port);

        debug!(
            %mode,
            root = %self.root.display(),
            proxy_port = %proxy_port,
            "assembling build configuration"
        );

        let mut proxy = IndexMap::new();
        proxy.insert(
            layout.proxy_prefix.clone(),
            ProxyRule::http(&layout.proxy_host, &proxy_port),
        );

        let config = BuildConfig {
            mode,
            devtool: Devtool::SourceMap,
            entry: resolve(&self.root, &layout.entry),
            output: OutputConfig {
                path: resolve(&self.root, &layout.output_dir),
                filename: layout.output_filename.clone(),
            },
            resolve: ResolveConfig {
                modules: vec![
                    layout.dependency_dir.clone(),
                    resolve(&self.root, &layout.dependency_dir),
                ],
            },
            dev_server: DevServerConfig {
                content_base: resolve(&self.root, &layout.content_base),
                port: layout.dev_server_port,
                proxy,
            },
            module: ModuleConfig::new(self.transform_rules(mode)?)?,
        };

        debug!(
            devtool = config.devtool.as_str(),
            rules = config.module.rules().len(),
            "build configuration assembled"
        );
        Ok(config)
    }

    /// Ordered transform rules for `mode`.
    ///
    /// The same Babel options feed the F# rule and the JavaScript rule; the
    /// debug defines go to the F# rule only, and only in development.
    pub fn transform_rules(&self, mode: Mode) -> Result<Vec<ModuleRule>> {
        let babel = BabelOptions::shared();
        let define = match mode {
            Mode::Development => self.layout.debug_defines.clone(),
            Mode::Production => Vec::new(),
        };

        let dependencies = PathPattern::literal(&dependency_segment(&self.layout.dependency_dir)?)?;

        Ok(vec![
            ModuleRule::new(
                ExtensionPattern::new(FSHARP_EXTENSIONS)?,
                LoaderUse::Fable(FableOptions {
                    babel: babel.clone(),
                    define,
                }),
            ),
            ModuleRule::new(
                ExtensionPattern::new(SCRIPT_EXTENSIONS)?,
                LoaderUse::Babel(babel),
            )
            .excluding(dependencies),
            ModuleRule::new(
                ExtensionPattern::new(STYLESHEET_EXTENSIONS)?,
                StyleLoader::sass_chain(),
            ),
        ])
    }
}

/// The dependency directory as a path segment for the script rule's
/// exclusion: `./node_modules/` becomes `node_modules`.
fn dependency_segment(dir: &Path) -> Result<String> {
    let segment = dir
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    if segment.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "dependency_dir".to_string(),
            message: format!("'{}' does not name a directory", dir.display()),
        });
    }

    Ok(segment)
}

/// Assemble with the default layout.
pub fn assemble(root: impl Into<PathBuf>, snapshot: &InvocationSnapshot) -> Result<BuildConfig> {
    Assembler::new(root).assemble(snapshot)
}
