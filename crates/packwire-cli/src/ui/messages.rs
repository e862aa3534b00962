//! Status message functions for terminal output.
//!
//! Styling goes through `if_supports_color`, so the choice made by
//! [`init_colors`](super::init_colors) applies to every line.

use owo_colors::{OwoColorize, Stream::Stderr, Style};

/// Print a success message to stderr.
pub fn success(message: &str) {
    let mark = "✓".if_supports_color(Stderr, |m| m.style(Style::new().green().bold()));
    eprintln!("{mark} {message}");
}

/// Print an info message to stderr.
///
/// # Examples
///
/// ```no_run
/// use packwire_cli::ui::info;
///
/// info("Bundling for development...");
/// ```
pub fn info(message: &str) {
    let mark = "ℹ".if_supports_color(Stderr, |m| m.style(Style::new().blue().bold()));
    eprintln!("{mark} {message}");
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    let mark = "⚠".if_supports_color(Stderr, |m| m.style(Style::new().yellow().bold()));
    eprintln!("{mark} {}", message.if_supports_color(Stderr, |m| m.yellow()));
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    let mark = "✗".if_supports_color(Stderr, |m| m.style(Style::new().red().bold()));
    eprintln!("{mark} {}", message.if_supports_color(Stderr, |m| m.red()));
}
