//! Error taxonomy for split and combine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TssError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TssError {
    /// Malformed input, invalid shares or a violated precondition
    #[error("argument error: {0}")]
    Argument(String),

    /// Reconstruction produced nothing that could be verified
    #[error("no secret: {0}")]
    NoSecret(String),

    /// The recovered secret does not match its embedded digest
    #[error("invalid secret hash: {0}")]
    InvalidSecretHash(String),

    /// Field arithmetic fault or unsupported header data
    #[error("fatal: {0}")]
    Fatal(String),
}

impl TssError {
    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    pub(crate) fn no_secret(msg: impl Into<String>) -> Self {
        Self::NoSecret(msg.into())
    }

    pub(crate) fn invalid_hash(msg: impl Into<String>) -> Self {
        Self::InvalidSecretHash(msg.into())
    }

    pub(crate) fn fatal(msg: impl Into<String>) -> Self {
        Self::Fatal(msg.into())
    }
}
