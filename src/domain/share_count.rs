//! `ShareCount` newtype for threshold secret sharing

use crate::error::{Result, TssError};

/// Number of shares to create (1..=255)
///
/// Every share needs a distinct non-zero index byte, so at most 255 shares
/// can exist in one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count (255)
    pub const MAX: u8 = 255;

    pub const DEFAULT: u8 = 5;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`TssError::Argument`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tss::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(ShareCount::MAX).unwrap();
    /// assert_eq!(*max_count, 255);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(TssError::argument("num_shares must be at least 1"));
        }
        Ok(Self(value))
    }
}

impl Default for ShareCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
