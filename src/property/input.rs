// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::property::errors::ValidationError;

/// Parses the text of an integer input. Blank input means "no value".
pub fn parse_int_input(input: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidInteger(input.to_owned()))
}

/// Parses the text of a decimal input. Blank input means "no value", `NaN` and infinite numbers
/// are rejected.
pub fn parse_float_input(input: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ValidationError::InvalidFloat(input.to_owned())),
    }
}
