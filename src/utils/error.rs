use thiserror::Error;

/// Failures of a single results fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint {url} answered with status {status}")]
    Status { status: u16, url: String },

    #[error("response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response is not wrapped in callback `{expected}`")]
    Callback { expected: String },
}

#[derive(Error, Debug)]
pub enum PlayWheError {
    #[error("mark {mark} is outside the spirit table (1-36)")]
    OutOfRange { mark: i64 },

    #[error("unknown period code `{code}`")]
    UnknownPeriod { code: String },

    #[error("malformed date `{input}`: {reason}")]
    MalformedDate { input: String, reason: String },

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value `{value}` for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Network,
    Configuration,
    Output,
}

impl PlayWheError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlayWheError::OutOfRange { .. }
            | PlayWheError::UnknownPeriod { .. }
            | PlayWheError::MalformedDate { .. } => ErrorCategory::Data,
            PlayWheError::Fetch(_) => ErrorCategory::Network,
            PlayWheError::ConfigError { .. } | PlayWheError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PlayWheError::IoError(_)
            | PlayWheError::SerializationError(_)
            | PlayWheError::CsvError(_)
            | PlayWheError::RenderError { .. } => ErrorCategory::Output,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Data => 3,
            ErrorCategory::Output => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlayWheError::Fetch(FetchError::Transport(_)) => {
                "Could not reach the results server".to_string()
            }
            PlayWheError::Fetch(FetchError::Status { status, .. }) => {
                format!("The results server refused the request (HTTP {})", status)
            }
            PlayWheError::Fetch(_) => "The results server sent data we could not read".to_string(),
            PlayWheError::OutOfRange { mark } => {
                format!("Draw data contains an impossible mark ({})", mark)
            }
            PlayWheError::UnknownPeriod { code } => {
                format!("Draw data contains an unknown period ({})", code)
            }
            PlayWheError::MalformedDate { input, .. } => {
                format!("Draw data contains an unreadable date ({})", input)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your connection and the --api-base value, then try again",
            ErrorCategory::Data => "The server returned bad records; report it to the API maintainer",
            ErrorCategory::Configuration => "Fix the option or config file value named above",
            ErrorCategory::Output => "Try a different --format or check that stdout is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlayWheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_drive_exit_codes() {
        let data = PlayWheError::OutOfRange { mark: 40 };
        assert_eq!(data.category(), ErrorCategory::Data);
        assert_eq!(data.exit_code(), 3);

        let network = PlayWheError::from(FetchError::Status {
            status: 503,
            url: "http://localhost/results".to_string(),
        });
        assert_eq!(network.category(), ErrorCategory::Network);
        assert_eq!(network.exit_code(), 2);
        assert!(network.user_friendly_message().contains("503"));

        let config = PlayWheError::ConfigError {
            message: "missing".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
    }
}
