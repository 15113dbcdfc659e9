//! Parsing of command-line values into API payloads

use crate::api::models::{ColumnDefinition, Record};
use crate::error::{AppError, CliError};
use serde_json::Value;

/// Parse a JSON object literal, e.g. `{"color": "Blue", "quantity": 3}`
pub fn parse_record(raw: &str) -> Result<Record, AppError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(CliError::InvalidArguments(format!(
            "record data must be a JSON object, got {}",
            other
        ))
        .into()),
        Err(e) => Err(CliError::InvalidArguments(format!("invalid record JSON: {}", e)).into()),
    }
}

/// Parse `key=value`; the value may itself contain `=`
pub fn parse_filter(raw: &str) -> Result<(String, String), AppError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(CliError::InvalidArguments(format!(
            "invalid filter '{}': expected key=value",
            raw
        ))
        .into()),
    }
}

/// Parse `name:TYPE`
pub fn parse_column(raw: &str) -> Result<ColumnDefinition, AppError> {
    match raw.split_once(':') {
        Some((name, column_type)) if !name.trim().is_empty() && !column_type.trim().is_empty() => {
            Ok(ColumnDefinition::new(
                name.trim(),
                column_type.trim().to_ascii_uppercase(),
            ))
        }
        _ => Err(CliError::InvalidArguments(format!(
            "invalid column '{}': expected name:TYPE",
            raw
        ))
        .into()),
    }
}
