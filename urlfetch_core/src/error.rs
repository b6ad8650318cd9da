use thiserror::Error;

/// Literal message delivered to error callbacks when a URL scheme is rejected.
pub const SCHEME_REJECTED_MESSAGE: &str = "Only http and https URLs are permitted";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Only http and https URLs are permitted")]
    RejectedScheme(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_scheme_uses_fixed_message() {
        let err = FetchError::RejectedScheme("file".to_string());
        assert_eq!(err.to_string(), SCHEME_REJECTED_MESSAGE);
    }

    #[test]
    fn test_transport_message_is_non_empty() {
        let err = FetchError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
