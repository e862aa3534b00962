//! packwire - assembles the web client bundler configuration.
//!
//! Parses arguments, initializes logging and colors, then dispatches to the
//! selected command.

use clap::Parser;
use miette::Result;
use packwire_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Emit(emit_args) => commands::emit_execute(emit_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Layout(layout_args) => commands::layout_execute(layout_args),
    };

    result.map_err(error::cli_error_to_miette)
}
