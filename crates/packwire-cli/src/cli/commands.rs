use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available packwire subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the configuration and write it for the bundler
    ///
    /// Reads the process arguments and environment once, prints which mode
    /// is bundling, and writes a webpack.config.js module (or JSON) to
    /// stdout or to --out.
    Emit(EmitArgs),

    /// Validate the layout and the project on disk
    ///
    /// Assembles both modes to prove the transform rules are disjoint, then
    /// checks that the entry file and dependency directory exist.
    Check(CheckArgs),

    /// Print the effective project layout as TOML
    Layout(LayoutArgs),
}

/// Options shared by every command that reads a project
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root; relative layout paths are resolved against it
    ///
    /// Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Layout file to use instead of <root>/packwire.toml
    ///
    /// Relative paths are taken from the project root.
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,
}

/// Arguments for the emit command
#[derive(Args, Debug)]
pub struct EmitArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Bundle for production
    ///
    /// Drops the debug defines from the F# loader options.
    #[arg(short = 'p', long)]
    pub production: bool,

    /// Output format
    ///
    /// - js: a webpack.config.js module with regex literals
    /// - json: plain JSON, patterns as strings
    #[arg(short = 'f', long, value_enum, default_value = "js")]
    pub format: EmitFormat,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only validate the configuration, skip filesystem checks
    #[arg(long)]
    pub schema_only: bool,
}

/// Arguments for the layout command
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
