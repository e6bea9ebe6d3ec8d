//! Text and JSON renderings of a result.

use crate::error::MatpropsError;

use common::ErrorLocation;
use models::{BenchmarkedResult, ComputationResponse, Operation};

use std::fmt::Write;
use std::panic::Location;

const DECIMALS: usize = 10;

/// One `label = value` line per result, then the elapsed breakdown.
pub fn render_text(result: &BenchmarkedResult<ComputationResponse>) -> String {
    let mut out = String::new();

    if let Some(response) = &result.values {
        let width = response
            .labelled()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);

        for (label, value) in response.labelled() {
            let _ = writeln!(out, "{label:<width$} = {value:.precision$}", precision = DECIMALS);
        }
    }

    let _ = write!(out, "elapsed: {}", result.elapsed);
    out
}

/// The local command surface's return shape: `[values, {"secs", "nanos"}]`.
pub fn render_json(result: &BenchmarkedResult<ComputationResponse>) -> Result<String, MatpropsError> {
    let flat = result.clone().map(ComputationResponse::into_values);

    serde_json::to_string(&flat).map_err(|e| MatpropsError::Matprops {
        message: format!("Failed to serialize result: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Failure line for the terminal, or the tagged error object when `json` is set.
pub fn render_failure(error: &MatpropsError, json: bool) -> String {
    if json {
        return serde_json::to_string(error).unwrap_or_else(|_| error.to_string());
    }

    match error.failure_kind() {
        Some(kind) => format!("Computation failed: {kind}"),
        None => error.to_string(),
    }
}

/// Every operation with its parameters, result labels and wire layouts.
pub fn render_catalogue() -> String {
    let mut out = String::new();

    for operation in Operation::ALL {
        let spec = operation.spec();
        let _ = writeln!(out, "{operation}");
        let _ = writeln!(out, "  parameters: {}", spec.parameters.join(", "));
        let _ = writeln!(out, "  results:    {}", spec.response_fields.join(", "));
        let _ = writeln!(
            out,
            "  request:    {} bytes ({})",
            operation.request_size(),
            operation.request_struct_format()
        );
        let _ = writeln!(
            out,
            "  response:   {} bytes ({})",
            operation.response_size(),
            operation.response_struct_format()
        );
    }

    out
}
