//! Classification of failed HTTP responses from the package API.

use reqwest::StatusCode;

/// A request that reached the server but was answered with an error status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// HTTP 429, or 503 which the API uses when throttling
    RateLimited,
    /// HTTP 404
    NotFound,
    /// Any other 4xx status
    ClientError(u16),
    /// Any other 5xx status
    ServerError(u16),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::RateLimited => {
                write!(f, "Rate limit exceeded. Try again later.")
            }
            RequestError::NotFound => write!(f, "Not found: check --api-url"),
            RequestError::ClientError(code) => write!(f, "Request error: HTTP {}", code),
            RequestError::ServerError(code) => write!(f, "Server error: HTTP {}", code),
        }
    }
}

impl std::error::Error for RequestError {}

/// Maps an HTTP status to a `RequestError`. Returns None for non-error statuses.
pub fn classify_status(status: StatusCode) -> Option<RequestError> {
    match status {
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => {
            Some(RequestError::RateLimited)
        }
        StatusCode::NOT_FOUND => Some(RequestError::NotFound),
        s if s.is_client_error() => Some(RequestError::ClientError(s.as_u16())),
        s if s.is_server_error() => Some(RequestError::ServerError(s.as_u16())),
        _ => None,
    }
}
