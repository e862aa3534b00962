//! Terminal status output.
//!
//! Everything here writes to stderr; stdout is reserved for emitted
//! configuration.

mod messages;

pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Apply the color decision to status messages.
///
/// Should be called once, early in `main`.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
