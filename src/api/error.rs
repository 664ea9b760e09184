//! API Errors

use thiserror::Error;

/// Failure of a backend call. Cloneable so it can live in a signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("not authorized")]
    Unauthorized,
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid API URL: {0}")]
    Config(String),
}

impl ApiError {
    /// Text for the error panel
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            ApiError::Status { status: 404, .. } => "We couldn't find what you were looking for.".to_string(),
            ApiError::Status { message, .. } => format!("Something went wrong: {}", message),
            ApiError::Unauthorized => "Please sign in to continue.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Config(_) => "The app is misconfigured (API URL).".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let not_found = ApiError::Status { status: 404, message: "gone".to_string() };
        assert_eq!(not_found.user_message(), "We couldn't find what you were looking for.");
        assert_eq!(
            ApiError::Status { status: 500, message: "db down".to_string() }.user_message(),
            "Something went wrong: db down"
        );
        assert_eq!(ApiError::Unauthorized.to_string(), "not authorized");
    }
}
