use crate::storage::StorageError;
use thiserror::Error;

/// Coarse error classes callers branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Validation,
    Server,
    Parse,
    Config,
    Storage,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    /// Input rejected before it reached the API.
    #[error("{0}")]
    Validation(String),
    /// A 2xx response that lacked the field the flow depends on.
    #[error("{0}")]
    Rejected(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Network(_) | Self::Timeout(_) => ErrorKind::Network,
            Self::Http { .. } => ErrorKind::Server,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Validation(_) | Self::Rejected(_) => ErrorKind::Validation,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }

    /// HTTP status for server errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
