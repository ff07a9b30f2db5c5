//! Output formatting utilities

use colored::Colorize;

/// Print a success message
pub(crate) fn success(msg: &str) {
	println!("{} {}", "✓".green().bold(), msg);
}

/// Print an error message
pub(crate) fn error(msg: &str) {
	eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Print an info message
pub(crate) fn info(msg: &str) {
	println!("{} {}", "ℹ".blue().bold(), msg);
}
