//! packwire CLI - build configuration for the web client bundle.
//!
//! This crate is the command-line front end for `packwire-config`: it reads
//! the project layout, captures the invocation and writes the assembled
//! configuration for the bundler.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - Structured logging with tracing, written to stderr
//! - [`ui`] - Colored status messages on stderr
//!
//! # Example
//!
//! ```rust
//! use packwire_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
