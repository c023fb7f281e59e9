//! Threshold newtype for threshold secret sharing

use crate::error::{Result, TssError};

/// Number of shares required to reconstruct a secret (1..=255)
///
/// A threshold of 1 is allowed: every share then carries the whole secret,
/// which is useful for plain redundant copies with an embedded digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    pub const MIN: u8 = 1;

    pub const MAX: u8 = 255;

    pub const DEFAULT: u8 = 3;

    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`TssError::Argument`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tss::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(1).is_ok());
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(TssError::argument(format!(
                "threshold must be an Integer between {} and {} (got {value})",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
