//! Error types for the FPL MCP server

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("FPL API returned {status} for {endpoint}")]
    RemoteFetch { status: String, endpoint: String },

    #[error("Authentication failed: {status}")]
    Authentication { status: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("{message}")]
    Validation { message: String },
}

impl FplError {
    /// Configuration error from a plain message.
    pub fn config(message: impl Into<String>) -> Self {
        FplError::Config {
            message: message.into(),
        }
    }

    /// Validation error from a plain message.
    pub fn validation(message: impl Into<String>) -> Self {
        FplError::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FplError::from(json_error);

        match err {
            FplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_remote_fetch_error_message() {
        let err = FplError::RemoteFetch {
            status: "404 Not Found".to_string(),
            endpoint: "entry/42/".to_string(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("404 Not Found"));
        assert!(rendered.contains("entry/42/"));
    }

    #[test]
    fn test_config_error_message() {
        let err = FplError::config("FPL_EMAIL and FPL_PASSWORD required");
        assert!(err.to_string().contains("FPL_EMAIL and FPL_PASSWORD"));
    }

    #[test]
    fn test_player_not_found_error() {
        let err = FplError::PlayerNotFound {
            name: "Smith".to_string(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("Player not found"));
        assert!(rendered.contains("Smith"));
    }

    #[test]
    fn test_validation_error_message() {
        let err = FplError::validation("Provide between 2 and 5 player names");
        assert_eq!(err.to_string(), "Provide between 2 and 5 player names");
    }

    #[test]
    fn test_result_type_alias() {
        fn ok_path() -> Result<&'static str> {
            Ok("fine")
        }

        assert_eq!(ok_path().unwrap(), "fine");
    }
}
