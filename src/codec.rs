//! Share wire formats
//!
//! Every share starts with a fixed 20 byte header that is identical for all
//! shares of one split, followed by the share index and the payload:
//!
//! ```text
//! +----------------+-----------+-----------+----------------+-------+-----------+
//! | identifier[16] | hash_code | threshold | share_len (BE) | index | payload.. |
//! +----------------+-----------+-----------+----------------+-------+-----------+
//! ```
//!
//! `share_len` counts the index byte plus the payload, which keeps shares
//! compatible with the Python `tss` module and other implementations of the
//! TSS Internet-Draft.
//!
//! The human format wraps the binary share in URL-safe Base64 with some
//! readable metadata in front:
//!
//! ```text
//! tss~v1~{identifier}~{threshold}~{base64url(binary share)}
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tss::codec::{ShareHeader, decode_human, encode_binary, encode_human};
//! use tss::domain::ShareIndex;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let header = ShareHeader::new(b"abc", 2, 3, 4)?;
//! let binary = encode_binary(&header, ShareIndex::new(1)?, &[0xDE, 0xAD, 0xBE]);
//! assert_eq!(binary.len(), 24);
//!
//! let human = encode_human(&header, &binary);
//! assert!(human.starts_with("tss~v1~abc~3~"));
//!
//! assert_eq!(decode_human(&human)?, binary);
//! assert_eq!(ShareHeader::decode(&binary)?, header);
//! # Ok(())
//! # }
//! ```

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::digest::HashAlgorithm;
use crate::domain::{Identifier, ShareIndex, is_valid_identifier};
use crate::error::{Result, TssError};

/// Size of the binary share header in bytes
pub const HEADER_LEN: usize = 20;

/// Literal that starts every human share
pub const HUMAN_PREFIX: &str = "tss";

/// Human format version
pub const HUMAN_VERSION: &str = "v1";

const HUMAN_SEPARATOR: char = '~';

/// URL-safe Base64 that writes padding and accepts it either way on decode
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The fixed 20 byte header carried by every share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareHeader {
    identifier: Vec<u8>,
    hash_code: u8,
    threshold: u8,
    share_len: u16,
}

impl ShareHeader {
    /// Creates a header
    ///
    /// # Errors
    /// Returns [`TssError::Argument`] if the identifier is longer than 16
    /// bytes
    pub fn new(identifier: &[u8], hash_code: u8, threshold: u8, share_len: u16) -> Result<Self> {
        if identifier.len() > Identifier::MAX_LEN {
            return Err(TssError::argument(
                "identifier must fit in the 16 byte header field",
            ));
        }
        Ok(Self {
            identifier: identifier.to_vec(),
            hash_code,
            threshold,
            share_len,
        })
    }

    /// Identifier with trailing null padding removed
    #[must_use]
    pub fn identifier(&self) -> &[u8] {
        &self.identifier
    }

    /// Identifier as text; header bytes are untrusted so invalid UTF-8 is
    /// replaced rather than rejected
    #[must_use]
    pub fn identifier_lossy(&self) -> String {
        String::from_utf8_lossy(&self.identifier).into_owned()
    }

    #[must_use]
    pub fn hash_code(&self) -> u8 {
        self.hash_code
    }

    /// Checked lookup of the header's hash code
    ///
    /// # Errors
    /// Returns [`TssError::Fatal`] for reserved or vendor specific codes
    pub fn hash_algorithm(&self) -> Result<HashAlgorithm> {
        HashAlgorithm::from_code(self.hash_code)
    }

    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Length of index plus payload
    #[must_use]
    pub fn share_len(&self) -> u16 {
        self.share_len
    }

    #[must_use]
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..self.identifier.len()].copy_from_slice(&self.identifier);
        out[16] = self.hash_code;
        out[17] = self.threshold;
        out[18..20].copy_from_slice(&self.share_len.to_be_bytes());
        out
    }

    /// Parses the header at the start of a binary share
    ///
    /// # Errors
    /// Returns [`TssError::Argument`] if fewer than 20 bytes are supplied
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(TssError::argument("invalid shares, too short"));
        }

        let raw_id = &bytes[..16];
        let id_len = raw_id.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);

        Ok(Self {
            identifier: raw_id[..id_len].to_vec(),
            hash_code: bytes[16],
            threshold: bytes[17],
            share_len: u16::from_be_bytes([bytes[18], bytes[19]]),
        })
    }
}

/// One encoded share produced by a split
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Share {
    Binary(Vec<u8>),
    Human(String),
}

impl Share {
    /// The share as it would be handed to a combine
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Binary(bytes) => bytes,
            Self::Human(text) => text.as_bytes(),
        }
    }

    /// The raw binary octets, unwrapping the human format if needed
    ///
    /// # Errors
    /// Returns [`TssError::Argument`] if a human share is malformed
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        match self {
            Self::Binary(bytes) => Ok(bytes.clone()),
            Self::Human(text) => decode_human(text),
        }
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Human shares print as-is, binary shares as lowercase hex
impl std::fmt::Display for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(bytes) => f.write_str(&hex::encode(bytes)),
            Self::Human(text) => f.write_str(text),
        }
    }
}

/// Builds a binary share: header, index byte, payload
#[must_use]
pub fn encode_binary(header: &ShareHeader, index: ShareIndex, payload: &[u8]) -> Vec<u8> {
    let mut share = Vec::with_capacity(HEADER_LEN + 1 + payload.len());
    share.extend_from_slice(&header.encode());
    share.push(*index);
    share.extend_from_slice(payload);
    share
}

/// Splits a binary share into its header and the `[index, payload..]` body
///
/// # Errors
/// Returns [`TssError::Argument`] if the share is shorter than the header
pub fn split_binary(share: &[u8]) -> Result<(ShareHeader, &[u8])> {
    let header = ShareHeader::decode(share)?;
    Ok((header, &share[HEADER_LEN..]))
}

/// Wraps a binary share in the `tss~v1~...` text format
#[must_use]
pub fn encode_human(header: &ShareHeader, binary: &[u8]) -> String {
    format!(
        "{HUMAN_PREFIX}~{HUMAN_VERSION}~{}~{}~{}",
        header.identifier_lossy(),
        header.threshold(),
        BASE64_URL.encode(binary)
    )
}

/// Whether `share` matches the human share pattern
#[must_use]
pub fn is_human(share: &[u8]) -> bool {
    std::str::from_utf8(share).is_ok_and(|s| human_payload(s).is_some())
}

/// Whether `share` starts like a human share, without checking the rest
#[must_use]
pub fn has_human_prefix(share: &[u8]) -> bool {
    share
        .strip_prefix(HUMAN_PREFIX.as_bytes())
        .is_some_and(|rest| rest.first() == Some(&(HUMAN_SEPARATOR as u8)))
}

/// Unwraps a human share back into its binary octets
///
/// # Errors
/// Returns [`TssError::Argument`] if the text does not match the pattern or
/// carries invalid Base64
pub fn decode_human(share: &str) -> Result<Vec<u8>> {
    let payload = human_payload(share).ok_or_else(|| {
        TssError::argument("invalid shares, some human format shares do not match expected pattern")
    })?;

    BASE64_URL.decode(payload).map_err(|_| {
        TssError::argument("invalid shares, some human format shares have invalid Base64 data")
    })
}

/// Returns the Base64 field if every part of `share` has the expected shape
fn human_payload(share: &str) -> Option<&str> {
    let mut parts = share.split(HUMAN_SEPARATOR);
    let (prefix, version, identifier, threshold, payload) = (
        parts.next()?,
        parts.next()?,
        parts.next()?,
        parts.next()?,
        parts.next()?,
    );
    if parts.next().is_some() || prefix != HUMAN_PREFIX || version != HUMAN_VERSION {
        return None;
    }

    let threshold_ok = (1..=3).contains(&threshold.len())
        && threshold.bytes().all(|b| b.is_ascii_digit());

    let data = payload.trim_end_matches('=');
    let padding = payload.len() - data.len();
    let payload_ok = !data.is_empty()
        && padding <= 2
        && data
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'));

    (is_valid_identifier(identifier) && threshold_ok && payload_ok).then_some(payload)
}
