//! Layout command implementation.

use crate::cli::LayoutArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print the effective layout (defaults merged with the layout file) as
/// TOML on stdout.
pub fn execute(args: LayoutArgs) -> Result<()> {
    let root = utils::project_root(&args.project)?;
    let layout = utils::load_layout(&root, &args.project)?;

    print!("{}", layout.to_toml()?);
    Ok(())
}
