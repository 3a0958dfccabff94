//! Error types of the native client

use contracts::system::session::SessionStoreError;
use contracts::usecases::u501_import_residents::ImportError;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Failure of a single HTTP exchange with the API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Not logged in. Run 'society login' first.")]
    NotAuthenticated,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Error parsing CSV: {0}")]
    Import(#[from] ImportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ClientError::from(ApiError::Status {
            status: 400,
            body: "Email already exists".into(),
        });
        assert_eq!(err.to_string(), "API error (status 400): Email already exists");
    }

    #[test]
    fn test_import_error_message() {
        let err = ClientError::from(ImportError::Parse {
            line: Some(2),
            message: "expected 3 fields, found 1".into(),
        });
        assert_eq!(
            err.to_string(),
            "Error parsing CSV: line 2: expected 3 fields, found 1"
        );
    }
}
