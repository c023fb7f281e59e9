//! One-way hash functions used to make a split robust
//!
//! The digest of the secret is split along with it, so that a combine can
//! tell a correct reconstruction from garbage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest as _, Sha256};

use crate::error::{Result, TssError};

/// Hash algorithm identified by a one-byte code in every share header
///
/// Codes 3..=127 are reserved and 128..=255 are vendor specific; neither is
/// supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HashAlgorithm {
    None,
    Sha1,
    #[default]
    Sha256,
}

impl HashAlgorithm {
    pub const ALL: [Self; 3] = [Self::None, Self::Sha1, Self::Sha256];

    /// Wire code written into the share header
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Sha1 => 1,
            Self::Sha256 => 2,
        }
    }

    /// Looks up the algorithm for a header code
    ///
    /// # Errors
    /// Returns [`TssError::Fatal`] for reserved (3..=127) and vendor specific
    /// (128..=255) codes. Header bytes are untrusted during a combine so an
    /// unknown code is never mapped to `None`.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Sha1),
            2 => Ok(Self::Sha256),
            3..=127 => Err(TssError::fatal(format!(
                "hash code {code} is reserved and not supported"
            ))),
            128..=255 => Err(TssError::fatal(format!(
                "hash code {code} is vendor specific and not supported"
            ))),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn byte_len(self) -> usize {
        match self {
            Self::None => 0,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }

    /// Whether this algorithm produces a digest that can verify a secret
    #[must_use]
    pub const fn is_verifiable(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Digest of `bytes`, empty for [`HashAlgorithm::None`]
    #[must_use]
    pub fn digest(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::None => Vec::new(),
            Self::Sha1 => Sha1::digest(bytes).to_vec(),
            Self::Sha256 => Sha256::digest(bytes).to_vec(),
        }
    }

    /// Lowercase hex digest of `bytes`, `None` for [`HashAlgorithm::None`]
    #[must_use]
    pub fn hex_digest(self, bytes: &[u8]) -> Option<String> {
        self.is_verifiable().then(|| hex::encode(self.digest(bytes)))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = TssError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Ok(Self::None),
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            _ => Err(TssError::argument(format!(
                "hash algorithm must be one of NONE, SHA1, SHA256 (got '{s}')"
            ))),
        }
    }
}
