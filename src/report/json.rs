use crate::report::types::FootprintReport;

/// JSON formatter for footprint reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &FootprintReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &FootprintReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}
