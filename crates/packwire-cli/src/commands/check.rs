//! Check command implementation.
//!
//! Validates the layout and the project on disk without emitting anything.

use packwire_config::{
    Assembler, ConfigValidator, FsValidator, InvocationSnapshot, Mode, SchemaValidator,
    PRODUCTION_FLAG,
};
use tracing::debug;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the layout (file or defaults)
/// 2. Assemble both modes, which proves the transform rules are disjoint
/// 3. Schema checks on each assembled configuration
/// 4. Entry file and dependency directory exist (unless --schema-only)
///
/// # Errors
///
/// Returns the first failing check.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let root = utils::project_root(&args.project)?;
    let layout = utils::load_layout(&root, &args.project)?;
    let assembler = Assembler::new(&root).with_layout(layout);

    let validator: &dyn ConfigValidator = if args.schema_only {
        &SchemaValidator
    } else {
        &FsValidator
    };

    for mode in [Mode::Development, Mode::Production] {
        let mut snapshot = InvocationSnapshot::capture();
        if mode.is_production() {
            snapshot = snapshot.with_arg(PRODUCTION_FLAG);
        }

        let config = assembler.assemble(&snapshot)?;
        debug!(%mode, rules = config.module.rules().len(), "validating");
        if let Err(e) = validator.validate(&config) {
            ui::error(&format!("{mode} configuration is invalid"));
            return Err(e.into());
        }
        ui::success(&format!("  {mode} configuration is valid"));
    }

    if args.schema_only {
        ui::warning("Skipped filesystem checks (--schema-only)");
    }

    ui::success("All checks passed!");
    Ok(())
}
