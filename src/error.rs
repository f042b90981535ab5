// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VisibilityError>;

#[derive(Error, Debug)]
pub enum VisibilityError {
    #[error("GITHUB_TOKEN environment variable not set")]
    MissingToken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl VisibilityError {
    /// Whether the failure came from talking to GitHub, as opposed to local setup.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = VisibilityError::Api {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "GitHub API returned HTTP 401: Bad credentials"
        );
        assert!(err.is_remote());
    }

    #[test]
    fn test_local_errors_are_not_remote() {
        assert!(!VisibilityError::MissingToken.is_remote());
        assert!(!VisibilityError::Config("bad".to_string()).is_remote());
    }
}
