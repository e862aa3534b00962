//! Command implementations for the packwire CLI.
//!
//! - [`emit`] - Assemble and write the bundler configuration
//! - [`check`] - Validate the layout and the project on disk
//! - [`layout`] - Print the effective project layout
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod emit;
pub mod layout;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use emit::execute as emit_execute;
pub use layout::execute as layout_execute;
