//! Lenient decoding for JSON fields sent by loosely typed clients.
//!
//! Web forms and phone automations send coordinates either as JSON numbers
//! or as strings (`"12.97"`). Both are accepted and coerced on demand.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Error raised when a lenient number cannot be coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid number")]
pub struct NumberFormatError(pub String);

/// A JSON value that is either a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LenientNumber {
    Number(f64),
    Text(String),
}

impl LenientNumber {
    /// Coerces to a finite floating point value.
    pub fn to_f64(&self) -> Result<f64, NumberFormatError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| NumberFormatError(s.clone()))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NumberFormatError(self.to_string()))
        }
    }

    /// Coerces to an integer.
    ///
    /// JSON numbers are truncated toward zero; strings must hold an integer literal.
    pub fn to_i32(&self) -> Result<i32, NumberFormatError> {
        match self {
            Self::Number(n) => {
                let truncated = n.trunc();
                if truncated.is_finite()
                    && truncated >= i32::MIN as f64
                    && truncated <= i32::MAX as f64
                {
                    Ok(truncated as i32)
                } else {
                    Err(NumberFormatError(n.to_string()))
                }
            }
            Self::Text(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|_| NumberFormatError(s.clone())),
        }
    }
}

impl std::fmt::Display for LenientNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Distinguishes an absent field from an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// absent → `None`, `null` → `Some(None)`, value → `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
