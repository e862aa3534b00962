//! Command-line interface definition for packwire.
//!
//! # Command Structure
//!
//! - `packwire emit` - Assemble the bundler configuration and write it out
//! - `packwire check` - Validate the layout and the project on disk
//! - `packwire layout` - Print the effective project layout

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, EmitArgs, LayoutArgs, ProjectArgs};
pub use enums::*;

/// packwire - build configuration for the web client bundle
#[derive(Parser, Debug)]
#[command(
    name = "packwire",
    version,
    about = "Assembles the web client bundler configuration",
    long_about = "packwire assembles the configuration the bundler needs to build the web client:\n\
                  the F# entry, the loader chain, source maps and the dev-server API proxy.\n\
                  Pass -p for a production build; SUAVE_FABLE_PORT selects the API backend port."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
