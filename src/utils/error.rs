use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Failed to read input: {source}")]
    ReadError {
        #[source]
        source: std::io::Error,
    },

    #[error("Input ended before a number was entered")]
    EmptyInput,

    #[error("Invalid number '{input}': {source}")]
    ParseError {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    System,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::ReadError { .. } | CheckError::EmptyInput | CheckError::ParseError { .. } => {
                ErrorCategory::Input
            }
            CheckError::ConfigError { .. } | CheckError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            CheckError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::ReadError { source } => format!("Could not read from standard input: {}", source),
            CheckError::EmptyInput => "No number was entered".to_string(),
            CheckError::ParseError { input, .. } => {
                format!("'{}' is not a valid integer", input)
            }
            CheckError::IoError(e) => format!("I/O failure: {}", e),
            CheckError::ConfigError { message } => format!("Bad configuration: {}", message),
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::ReadError { .. } | CheckError::EmptyInput => {
                "Run the program again and type a number followed by Enter"
            }
            CheckError::ParseError { .. } => {
                "Enter a base-10 integer between -9223372036854775808 and 9223372036854775807"
            }
            CheckError::IoError(_) => "Check that standard output and the config file are accessible",
            CheckError::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            CheckError::InvalidConfigValueError { .. } => "Fix the value in the config file or on the command line",
        }
    }

    /// Every failure is fatal for a single-shot check.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_keeps_input() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = CheckError::ParseError {
            input: "abc".to_string(),
            source,
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.to_string().contains("'abc'"));
        assert!(err.user_friendly_message().contains("not a valid integer"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_categories() {
        assert_eq!(CheckError::EmptyInput.category(), ErrorCategory::Input);
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(CheckError::from(io).category(), ErrorCategory::System);
        let config = CheckError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Config);
        assert_eq!(config.exit_code(), 1);
    }
}
