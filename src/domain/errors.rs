//! Domain error types
//!
//! The masking passes themselves never fail. These errors cover the layers
//! around them: configuration, pattern compilation, input/output and the CLI.

use thiserror::Error;

/// Main Mascara error type
#[derive(Debug, Error)]
pub enum MascaraError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A built-in pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The caller supplied empty or whitespace-only text
    #[error("Please provide some text to anonymize.")]
    EmptyInput,

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl MascaraError {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            Self::EmptyInput => 3,
            _ => 5,
        }
    }
}

impl From<std::io::Error> for MascaraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MascaraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for MascaraError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration(format!("Failed to parse TOML: {err}"))
    }
}

impl From<regex::Error> for MascaraError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

impl From<fancy_regex::Error> for MascaraError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MascaraError::Configuration("bad log level".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad log level");

        let err = MascaraError::EmptyInput;
        assert_eq!(err.to_string(), "Please provide some text to anonymize.");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(MascaraError::Configuration(String::new()).exit_code(), 2);
        assert_eq!(MascaraError::EmptyInput.exit_code(), 3);
        assert_eq!(MascaraError::Io("disk full".to_string()).exit_code(), 5);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: MascaraError = io_err.into();
        assert!(matches!(err, MascaraError::Io(_)));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: MascaraError = regex_err.into();
        assert!(matches!(err, MascaraError::Pattern(_)));
    }
}
