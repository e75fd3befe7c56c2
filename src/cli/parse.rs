use docsize_core::format::OutputFormat;
use docsize_core::path::DocumentIdKind;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse document id kind from string
pub fn parse_id_kind(s: &str) -> std::result::Result<DocumentIdKind, String> {
    s.parse::<DocumentIdKind>().map_err(|e| e.to_string())
}
