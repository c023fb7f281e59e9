//! `Secret` newtype holding the bytes to be split

use zeroize::Zeroizing;

use crate::error::{Result, TssError};

/// Reserved byte used to left-pad secrets before splitting
pub const PAD_BYTE: u8 = 0x1F;

/// A validated secret (1..=65,502 bytes of UTF-8 text)
///
/// The bytes live in `Zeroizing` storage so they are wiped on drop. The
/// secret may not begin with [`PAD_BYTE`], since leading pad bytes are
/// stripped on reconstruction.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    pub const MIN_LEN: usize = 1;

    /// Leaves room for the largest digest and the 32 byte legacy pad
    pub const MAX_LEN: usize = 65_502;

    /// Creates a new secret from raw bytes
    ///
    /// # Errors
    /// Returns [`TssError::Argument`] if the bytes are not UTF-8, are empty,
    /// exceed 65,502 bytes or begin with the pad byte 0x1F
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tss::domain::Secret;
    ///
    /// let secret = Secret::new("my secret").unwrap();
    /// assert_eq!(secret.len(), 9);
    ///
    /// assert!(Secret::new("").is_err());
    /// assert!(Secret::new("\u{1f}abc").is_err());
    /// ```
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = Zeroizing::new(bytes.into());

        if std::str::from_utf8(&bytes).is_err() {
            return Err(TssError::argument(
                "secret must be a UTF-8 or US-ASCII String",
            ));
        }
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&bytes.len()) {
            return Err(TssError::argument(format!(
                "secret must be between {} and {} bytes in length (got {})",
                Self::MIN_LEN,
                Self::MAX_LEN,
                bytes.len()
            )));
        }
        if bytes.first() == Some(&PAD_BYTE) {
            return Err(TssError::argument(
                "secret must not begin with the padding char \\u001F",
            ));
        }

        Ok(Self(bytes))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret([REDACTED; {} bytes])", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_and_max_length() {
        assert!(Secret::new("a").is_ok());
        assert!(Secret::new("a".repeat(Secret::MAX_LEN)).is_ok());

        let err = Secret::new("a".repeat(Secret::MAX_LEN + 1)).unwrap_err();
        assert!(err.to_string().contains("between 1 and 65502"));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let err = Secret::new(vec![0xff, 0xfe, 0x41]).unwrap_err();
        assert!(matches!(err, TssError::Argument(_)));
    }

    #[test]
    fn test_multibyte_utf8_is_accepted() {
        let secret = Secret::new("unicode ½ ♥ 💩").unwrap();
        assert_eq!(secret.len(), "unicode ½ ♥ 💩".len());
    }

    #[test]
    fn test_rejects_leading_pad_byte() {
        let err = Secret::new("\u{1f}foo").unwrap_err();
        assert!(err.to_string().contains("padding char"));
        // Only the first byte is reserved
        assert!(Secret::new("foo\u{1f}").is_ok());
    }

    #[test]
    fn test_debug_redacts() {
        let secret = Secret::new("hunter2").unwrap();
        let debug = format!("{secret:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("7 bytes"));
    }
}
