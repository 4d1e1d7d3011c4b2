//! Presence checks for request fields. Values are not otherwise validated.

use crate::error::AppError;

pub struct RequestValidator;

impl RequestValidator {
    /// Take a required field, failing when it was missing or null.
    pub fn require<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
        value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_value_passes_through() {
        let v = RequestValidator::require("title", Some("Dune".to_string())).unwrap();
        assert_eq!(v, "Dune");
    }

    #[test]
    fn missing_value_names_the_field() {
        let err = RequestValidator::require::<String>("author", None).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "author is required"));
    }

    #[test]
    fn empty_string_is_not_null() {
        assert!(RequestValidator::require("title", Some(String::new())).is_ok());
    }
}
