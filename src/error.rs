//! Error types for the amphibians API client

/// Broad failure category, as seen by the view-state holder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No connectivity, timeout, or the body could not be read
    Network,
    /// The server answered, but not with a usable listing
    Protocol,
}

/// Errors that can occur while fetching the amphibians listing
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("server responded with HTTP {status}")]
    Status { status: u16 },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Status { .. } | ApiError::Decode(_) | ApiError::InvalidBaseUrl { .. } => {
                ErrorKind::Protocol
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Network(e) if e.is_timeout())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if !status.is_success() => ApiError::Status {
                status: status.as_u16(),
            },
            _ => ApiError::Network(err),
        }
    }
}
