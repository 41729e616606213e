use thiserror::Error;

use crate::core::wire::ApiError;

/// Broad classification of a [`DorfynError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied invalid input. No network activity took place.
    Argument,
    /// Anything that went wrong after local validation succeeded.
    Remote,
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DorfynError {
    /// Invalid caller input, detected before any I/O.
    #[error("code: api-error, detail: {0}")]
    Argument(String),

    /// A failure downstream of input validation.
    #[error("code: remote-error, detail: {0}")]
    Remote(#[from] RemoteError),
}

/// Everything that can go wrong once a request is on its way.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a failing HTTP status.
    #[error("Unexpected response status: {status} at {url}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The raw response body.
        body: String,
    },

    /// A successful response carried an embedded error object.
    #[error("API error: {0}")]
    Api(ApiError),

    /// The response body did not match the expected shape.
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The cookie/crumb handshake produced unusable credentials.
    #[error("Authentication failed: {0}")]
    Auth(String),
}

impl DorfynError {
    /// Which side of the boundary the failure belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument(_) => ErrorKind::Argument,
            Self::Remote(_) => ErrorKind::Remote,
        }
    }

    /// Short machine-friendly code, `api-error` or `remote-error`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Argument(_) => "api-error",
            Self::Remote(_) => "remote-error",
        }
    }

    /// Human-readable detail without the code prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::Argument(msg) => msg.clone(),
            Self::Remote(e) => e.to_string(),
        }
    }

    /// The HTTP status, if the failure was a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote(RemoteError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DorfynError {
    fn from(e: reqwest::Error) -> Self {
        DorfynError::Remote(RemoteError::Http(e))
    }
}

impl From<serde_json::Error> for DorfynError {
    fn from(e: serde_json::Error) -> Self {
        DorfynError::Remote(RemoteError::Json(e))
    }
}

impl From<ApiError> for DorfynError {
    fn from(e: ApiError) -> Self {
        DorfynError::Remote(RemoteError::Api(e))
    }
}

impl From<url::ParseError> for DorfynError {
    fn from(e: url::ParseError) -> Self {
        DorfynError::Argument(format!("invalid URL: {e}"))
    }
}
