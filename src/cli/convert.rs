//! Text -> literal Value conversion for command-line input

use crate::Value;

use super::CliError;

/// Parse a command-line literal.
///
/// Input is read as JSON first (`18`, `true`, `"Bob"`, `[1, 2]`, `null`).
/// Anything that is not valid JSON is taken as a bare string, so
/// `Bob` and `"Bob"` produce the same value.
pub fn parse_literal(input: &str) -> Result<Value, CliError> {
    let trimmed = input.trim();
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(json) => Ok(Value::try_from(json)?),
        Err(e) => {
            tracing::trace!(error = %e, "literal is not JSON, using bare string");
            Ok(Value::String(trimmed.to_string()))
        }
    }
}
