//! `Identifier` newtype embedded in every share of one split

use rand::{CryptoRng, RngCore};

use crate::error::{Result, TssError};

/// Opaque tag shared by all shares of one generation
///
/// 0..=16 characters from `[A-Za-z0-9._-]`. It is stored in a fixed
/// 16-byte header field and must not reveal anything about the secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Identifier(String);

impl Identifier {
    /// Maximum identifier length in bytes
    pub const MAX_LEN: usize = 16;

    /// Creates a new identifier
    ///
    /// # Errors
    /// Returns [`TssError::Argument`] if the identifier is longer than 16
    /// bytes or uses characters outside `[A-Za-z0-9._-]`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tss::domain::Identifier;
    ///
    /// let id = Identifier::new("backup-2024.1").unwrap();
    /// assert_eq!(id.as_str(), "backup-2024.1");
    ///
    /// assert!(Identifier::new("").is_ok());
    /// assert!(Identifier::new("a".repeat(17)).is_err());
    /// assert!(Identifier::new("no spaces").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !is_valid(&value) {
            return Err(TssError::argument(
                "identifier must be a String between 0 and 16 characters in length limited to [a-z, A-Z, 0-9, ., _, -]",
            ));
        }
        Ok(Self(value))
    }

    /// Random 16 character lowercase hex identifier
    #[must_use]
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; Self::MAX_LEN / 2];
        rng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Pure charset and length check, shared by config validation and the
/// human share parser
pub(crate) fn is_valid(value: &str) -> bool {
    value.len() <= Identifier::MAX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Identifier {
    type Err = TssError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
