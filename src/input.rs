//! Validation of raw form fields before they reach the calculator. The
//! capital arithmetic never errors on well-formed non-negative input, so
//! every rejection happens here.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A required monetary field was absent or blank.
    Missing { field: &'static str },
    /// The field was present but did not parse as a finite number.
    NotNumeric { field: &'static str, value: String },
    /// Monetary amounts are non-negative by contract.
    Negative { field: &'static str, value: f64 },
    /// An override named a field the filing does not have.
    UnknownField { name: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required field '{field}'"),
            Self::NotNumeric { field, value } => {
                write!(f, "field '{field}' is not numeric: '{value}'")
            }
            Self::Negative { field, value } => {
                write!(f, "field '{field}' must be non-negative, got {value}")
            }
            Self::UnknownField { name } => write!(f, "unknown field '{name}'"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse one required monetary field. Whitespace is trimmed; the value
/// must be a finite, non-negative number.
pub fn parse_amount(field: &'static str, raw: Option<&str>) -> Result<f64, InputError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(text) = raw else {
        return Err(InputError::Missing { field });
    };
    let value: f64 = text
        .parse()
        .map_err(|_| InputError::NotNumeric { field, value: text.to_string() })?;
    if !value.is_finite() {
        return Err(InputError::NotNumeric { field, value: text.to_string() });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(value)
}

/// Parse an optional monetary field; absent or blank means zero.
pub fn parse_amount_or_zero(field: &'static str, raw: Option<&str>) -> Result<f64, InputError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0.0),
        some => parse_amount(field, some),
    }
}
