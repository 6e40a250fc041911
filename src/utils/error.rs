use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairSumError {
    #[error("invalid list input: token {position} ({token:?}) is not an integer")]
    InvalidListInput { token: String, position: usize },

    #[error("invalid target input: {value:?} is not an integer")]
    InvalidTargetInput { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PairSumError {
    /// Malformed user input. These end the run without a failing exit status.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PairSumError::InvalidListInput { .. } | PairSumError::InvalidTargetInput { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PairSumError::InvalidListInput { token, .. } if token.is_empty() => {
                "you must enter at least one integer.".to_string()
            }
            PairSumError::InvalidListInput { .. } => {
                "you must enter integers only.".to_string()
            }
            PairSumError::InvalidTargetInput { .. } => {
                "the target must be an integer.".to_string()
            }
            PairSumError::IoError(e) => format!("could not read or write the console: {}", e),
            PairSumError::TomlError(_) | PairSumError::ConfigError { .. } => {
                format!("configuration problem: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PairSumError::InvalidListInput { .. } => {
                "Separate the numbers with spaces, e.g. `2 7 11 15`"
            }
            PairSumError::InvalidTargetInput { .. } => "Enter a single whole number, e.g. `9`",
            PairSumError::IoError(_) => "Check that standard input is readable",
            PairSumError::SerializationError(_) => "Retry with `--format text`",
            PairSumError::TomlError(_)
            | PairSumError::ConfigError { .. }
            | PairSumError::InvalidConfigValueError { .. } => {
                "Check the configuration file path and its TOML syntax"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PairSumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_flagged() {
        let list = PairSumError::InvalidListInput {
            token: "a".to_string(),
            position: 1,
        };
        let target = PairSumError::InvalidTargetInput {
            value: "abc".to_string(),
        };
        let config = PairSumError::ConfigError {
            message: "missing".to_string(),
        };

        assert!(list.is_input_error());
        assert!(target.is_input_error());
        assert!(!config.is_input_error());
    }

    #[test]
    fn test_user_friendly_message_for_empty_list() {
        let err = PairSumError::InvalidListInput {
            token: String::new(),
            position: 0,
        };
        assert_eq!(err.user_friendly_message(), "you must enter at least one integer.");
    }

    #[test]
    fn test_display_names_offending_token() {
        let err = PairSumError::InvalidListInput {
            token: "a".to_string(),
            position: 1,
        };
        assert_eq!(
            err.to_string(),
            "invalid list input: token 1 (\"a\") is not an integer"
        );
    }
}
