//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value for output: compact JSON for scripts, indented otherwise.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    rendered.unwrap_or_default()
}
