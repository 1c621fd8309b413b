//! User interface module - console output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Styled printing to stdout/stderr

use console::style;

use crate::pipeline::OperationKind;

pub mod formatter;

pub use formatter::{format_operations, format_trace};

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a verbose trace line (`>> message`).
pub fn display_trace(message: &str) {
    println!("{}", style(format_trace(message)).dim());
}

/// Print the table of available operations.
pub fn display_operations(kinds: &[OperationKind]) {
    print!("{}", format_operations(kinds));
}
