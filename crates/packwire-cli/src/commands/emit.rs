//! Emit command implementation.
//!
//! Captures the invocation once, announces the mode and writes the
//! assembled configuration.

use std::fs;
use std::io::Write;

use packwire_config::{render, Assembler, InvocationSnapshot, PRODUCTION_FLAG};
use tracing::info;

use crate::cli::{EmitArgs, EmitFormat};
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the emit command against the current process environment.
///
/// # Errors
///
/// Returns errors for an unreadable layout, overlapping rules or a failed
/// write.
pub fn execute(args: EmitArgs) -> Result<()> {
    run(args, InvocationSnapshot::capture())
}

/// Execute the emit command against an explicit snapshot.
pub fn run(args: EmitArgs, snapshot: InvocationSnapshot) -> Result<()> {
    let root = utils::project_root(&args.project)?;
    let layout = utils::load_layout(&root, &args.project)?;

    // `-p` may be parsed by clap without reaching the raw argument list.
    let snapshot = if args.production && !snapshot.mode().is_production() {
        snapshot.with_arg(PRODUCTION_FLAG)
    } else {
        snapshot
    };

    let mode = snapshot.mode();
    ui::info(&mode.notice());
    info!(%mode, root = %root.display(), "emitting build configuration");

    let config = Assembler::new(&root).with_layout(layout).assemble(&snapshot)?;
    let rendered = match args.format {
        EmitFormat::Js => render::to_js_module(&config)?,
        EmitFormat::Json => {
            let mut json = render::to_json(&config)?;
            json.push('\n');
            json
        }
    };

    match &args.out {
        Some(path) => {
            fs::write(path, rendered).with_path(path)?;
            ui::success(&format!("Wrote {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
