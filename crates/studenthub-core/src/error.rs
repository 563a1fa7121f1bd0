//! Client-side error types.

use thiserror::Error;

/// Errors surfaced by every StudentHub API call.
///
/// Transport adapters map their own failures into this type so callers
/// only ever handle one result shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Coarse error category handed to presentation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Auth,
    NotFound,
    Server,
    Network,
    Decode,
    Input,
}

impl ApiError {
    /// Map an HTTP status and server-provided message to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(message.into()),
            _ => ApiError::Server {
                status,
                message: message.into(),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthorized | ApiError::Forbidden | ApiError::MissingToken => {
                ErrorKind::Auth
            }
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Server { .. } => ErrorKind::Server,
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Decode(_) => ErrorKind::Decode,
            ApiError::InvalidInput(_) => ErrorKind::Input,
        }
    }

    /// Whether retrying the same request later could succeed.
    ///
    /// Nothing in this workspace retries; the flag exists for callers
    /// that want to offer a "try again" affordance.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result alias used across the client crates.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::from_status(401, "x"), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, "x"), ApiError::Forbidden);
        assert_eq!(
            ApiError::from_status(404, "post 9"),
            ApiError::NotFound("post 9".to_string())
        );
        assert_eq!(
            ApiError::from_status(500, "boom"),
            ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn transient_errors() {
        assert!(ApiError::Network("reset".into()).is_transient());
        assert!(ApiError::from_status(503, "").is_transient());
        assert!(!ApiError::from_status(422, "").is_transient());
        assert!(!ApiError::Unauthorized.is_transient());
        assert_eq!(ApiError::MissingToken.kind(), ErrorKind::Auth);
    }
}
