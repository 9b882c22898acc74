//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::SlnError;

/// Map an error to the line printed on stderr.
///
/// Usage errors print as-is; I/O and configuration failures get an `error:`
/// prefix so they read as diagnostics.
pub fn map_error(e: &SlnError) -> String {
    if e.is_usage() {
        e.to_string()
    } else {
        format!("error: {}", e)
    }
}
