//! Pure formatting functions for UI output.
//!
//! Everything here builds strings; printing happens in the parent module.

use crate::pipeline::OperationKind;

/// Prefix of verbose trace lines
pub const TRACE_PREFIX: &str = ">>";

/// Format a verbose trace line: `>> message`
pub fn format_trace(message: &str) -> String {
    format!("{} {}", TRACE_PREFIX, message)
}

/// Format the table printed by `--list`.
///
/// Operations are sorted by name and their help texts aligned in one column.
///
/// ```ignore
/// Operations:
///   bump-major       Bump the major version number.
///   ...
/// ```
pub fn format_operations(kinds: &[OperationKind]) -> String {
    let mut kinds = kinds.to_vec();
    kinds.sort_by_key(|kind| kind.name());

    let width = kinds.iter().map(|kind| kind.name().len()).max().unwrap_or(0);

    let mut out = String::from("Operations:\n");
    for kind in kinds {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            kind.name(),
            kind.help(),
            width = width
        ));
    }
    out
}
