//! Terminal output formatting utilities.

use colored::Colorize;
use tether_core::{Notice, Severity};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an info message.
pub fn info(msg: &str) {
    println!("{} {}", "→".blue(), msg);
}

/// Print an error message (always to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print every message of a notice at its severity.
pub fn report(notice: &Notice) {
    for msg in &notice.messages {
        match notice.severity {
            Severity::Error => error(msg),
            Severity::Warning => warn(msg),
        }
    }
}
