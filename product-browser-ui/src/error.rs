use thiserror::Error;

/// Coarse classification of a failed backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connectivity problem or a non-2xx response.
    Network,
    /// The body was not the JSON shape we expect.
    MalformedResponse,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server error: {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default()
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport(_) | ApiError::Status { .. } => ErrorKind::Network,
            ApiError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Short reason suitable for inline display on the page.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "the server could not be reached".to_string(),
            ApiError::Status { status, message: Some(message) } => format!("{message} (HTTP {status})"),
            ApiError::Status { status, message: None } => format!("the server responded with HTTP {status}"),
            ApiError::MalformedResponse(_) => "the server sent an unexpected response".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_are_network_kind() {
        let err = ApiError::Status { status: 404, message: Some("Customer with ID C9 not found".into()) };
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.user_message(), "Customer with ID C9 not found (HTTP 404)");
        assert_eq!(err.to_string(), "Server error: 404 (Customer with ID C9 not found)");
    }

    #[test]
    fn test_decode_errors_are_malformed_kind() {
        let decode = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = ApiError::from(decode);
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert_eq!(err.user_message(), "the server sent an unexpected response");
    }

    #[test]
    fn test_status_without_message() {
        let err = ApiError::Status { status: 500, message: None };
        assert_eq!(err.to_string(), "Server error: 500");
        assert_eq!(err.user_message(), "the server responded with HTTP 500");
    }
}
