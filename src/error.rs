//! Error types and handling for the `TravelCraft` client

use thiserror::Error;

/// Main error type for the `TravelCraft` client
#[derive(Error, Debug)]
pub enum TravelCraftError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Trip form validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Webhook communication errors
    #[error("Request error: {source}")]
    Request {
        #[from]
        source: RequestError,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Transport-level failure of the itinerary webhook call.
///
/// A completed HTTP exchange whose body is JSON is never a `RequestError`,
/// whatever its status code or `success` flag says.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// The body arrived but was not valid JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Network(err.to_string())
    }
}

impl TravelCraftError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelCraftError::Config { .. } => {
                "Configuration error. Please check your config file and webhook URL.".to_string()
            }
            TravelCraftError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelCraftError::Request { .. } => {
                "Unable to reach the trip planner. Please check your internet connection."
                    .to_string()
            }
            TravelCraftError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TravelCraftError::config("bad url");
        assert!(matches!(config_err, TravelCraftError::Config { .. }));

        let validation_err = TravelCraftError::validation("empty destination");
        assert!(matches!(validation_err, TravelCraftError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TravelCraftError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = TravelCraftError::validation("pick an interest");
        assert!(validation_err.user_message().contains("pick an interest"));

        let request_err: TravelCraftError = RequestError::Network("refused".into()).into();
        assert!(request_err.user_message().contains("Unable to reach"));
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let request_err: RequestError = json_err.into();
        assert!(matches!(request_err, RequestError::Decode(_)));
        assert!(request_err.to_string().contains("Invalid response body"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TravelCraftError = io_err.into();
        assert!(matches!(err, TravelCraftError::Io { .. }));
    }
}
