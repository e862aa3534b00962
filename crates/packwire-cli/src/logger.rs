//! Logging infrastructure for the packwire CLI.
//!
//! Logs go to stderr so that `packwire emit` can write the configuration to
//! stdout untouched.
//!
//! # Example
//!
//! ```rust,no_run
//! use packwire_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("assembling configuration");
//! debug!("root: {}", "/srv/app");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "packwire=debug,packwire_cli=debug,packwire_config=debug";
const QUIET_FILTER: &str = "packwire=error,packwire_cli=error,packwire_config=error";
const DEFAULT_FILTER: &str = "packwire=info,packwire_cli=info,packwire_config=info";

/// Initialize the tracing subscriber with the specified options.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: DEBUG for packwire crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`, when set and valid
/// 4. INFO for packwire crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
