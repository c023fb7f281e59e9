//! `ShareIndex` newtype for threshold secret sharing

use crate::error::{Result, TssError};

/// Share index (1..=255)
///
/// The index is the X coordinate a share was evaluated at. Index 0 is the
/// point holding the secret itself and is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u8);

impl ShareIndex {
    pub const MIN: u8 = 1;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns [`TssError::Argument`] if index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tss::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(1).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// assert!(ShareIndex::new(255).is_ok());
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(TssError::argument("invalid shares, zero index"));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
