//! Error types used across Gangway.
use thiserror::Error;

/// High-level error categories for type-level operations and fs plumbing.
#[derive(Debug, Copy, Clone, Error)]
pub enum ErrorKind {
    #[error("invalid path")]
    InvalidPath,
    #[error("io error")]
    Io,
    #[error("configuration error")]
    Config,
}

/// Structured error with a kind and human message.
#[derive(Debug, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

impl Error {
    pub(crate) fn invalid_path(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidPath,
            msg: msg.into(),
        }
    }

    pub(crate) fn io(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            msg: msg.into(),
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Config,
            msg: msg.into(),
        }
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
