// Rust guideline compliant 2026-10-19

//! Output formatting for the canary CLI.

use canary_app::{AppError, ErrorEnvelope, SuccessEnvelope};
use canary_core::OutputFormat;
use serde_json::json;

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats a resolved config ID for display.
    fn format_resolved(&self, config_id: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &AppError) -> String;
}

/// JSON output formatter.
///
/// Wraps results in the standard success and error envelopes.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_resolved(&self, config_id: &str) -> String {
        let envelope = SuccessEnvelope::resolved(config_id);
        serde_json::to_string_pretty(&envelope)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize result" }).to_string())
    }

    fn format_error(&self, error: &AppError) -> String {
        let envelope = ErrorEnvelope::from_error(error);
        serde_json::to_string(&envelope)
            .unwrap_or_else(|_| json!({ "error": error.to_string() }).to_string())
    }
}

/// Plain text output formatter.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_resolved(&self, config_id: &str) -> String {
        config_id.to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("Error: {}", error)
    }
}

/// Creates a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
