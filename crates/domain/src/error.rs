//! Request validation errors raised while turning payloads into domain values.

use shared::lenient::NumberFormatError;
use thiserror::Error;

/// Errors produced when a request payload cannot become a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field} format: {source}")]
    InvalidNumber {
        field: &'static str,
        source: NumberFormatError,
    },

    #[error("Invalid {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    #[error("Invalid latitude or longitude format")]
    InvalidCoordinates,

    #[error("Event must be 'arrive' or 'exit'")]
    UnsupportedAutomationEvent,

    #[error("No fields to update")]
    NoFieldsToUpdate,
}

impl RequestError {
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Unwraps a required payload field or reports it missing by name.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, RequestError> {
    value.ok_or(RequestError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = require::<String>(None, "lat").unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: lat");
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require(Some(3), "lat"), Ok(3));
    }

    #[test]
    fn test_invalid_number_message() {
        let err = RequestError::InvalidNumber {
            field: "lon",
            source: NumberFormatError("east".to_string()),
        };
        assert_eq!(err.to_string(), "Invalid lon format: 'east' is not a valid number");
    }

    #[test]
    fn test_static_messages() {
        assert_eq!(
            RequestError::UnsupportedAutomationEvent.to_string(),
            "Event must be 'arrive' or 'exit'"
        );
        assert_eq!(RequestError::NoFieldsToUpdate.to_string(), "No fields to update");
    }
}
