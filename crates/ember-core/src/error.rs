//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Invalid range for {field}: min {min} is greater than max {max}")]
    InvalidRange { field: String, min: f64, max: f64 },

    #[error("Emitter has no images to draw")]
    EmptyImageSet,

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

impl EmberError {
    pub fn invalid_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        EmberError::InvalidRange {
            field: field.into(),
            min,
            max,
        }
    }

    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        EmberError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for errors raised while validating emitter configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EmberError::InvalidRange { .. }
                | EmberError::EmptyImageSet
                | EmberError::InvalidValue { .. }
        )
    }
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message() {
        let err = EmberError::invalid_range("speed", 10.0, 5.0);
        assert_eq!(
            err.to_string(),
            "Invalid range for speed: min 10 is greater than max 5"
        );
        assert!(err.is_configuration_error());
    }

    #[test]
    fn toml_errors_are_not_configuration_errors() {
        let err: EmberError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, EmberError::TomlParseError(_)));
        assert!(!err.is_configuration_error());
    }
}
