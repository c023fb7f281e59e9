//! Configuration validation for splits and combines

use super::{Identifier, OutputFormat, Secret, SelectBy, ShareCount, Threshold};
use crate::digest::HashAlgorithm;
use crate::error::{Result, TssError};

/// Everything a split needs
///
/// Enforces the invariant that threshold <= `share_count` at construction.
/// The remaining options have defaults and are set through the `with_*`
/// methods, which only accept already validated values.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    secret: Secret,
    threshold: Threshold,
    share_count: ShareCount,
    identifier: Option<Identifier>,
    hash_algorithm: HashAlgorithm,
    pad_blocksize: u8,
    format: OutputFormat,
}

impl SplitConfig {
    /// Creates a new split configuration
    ///
    /// Defaults: no identifier (the splitter draws a random 16 character hex
    /// one from its RNG), SHA256, no padding and human readable output.
    ///
    /// # Errors
    /// Returns an error if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tss::domain::{Secret, ShareCount, SplitConfig, Threshold};
    ///
    /// let config = SplitConfig::new(
    ///     Secret::new("my secret").unwrap(),
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    ///
    /// // Invalid: threshold > share_count
    /// let result = SplitConfig::new(
    ///     Secret::new("my secret").unwrap(),
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap(),
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(secret: Secret, threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            return Err(TssError::argument(format!(
                "num_shares must be an Integer between threshold value ({}) and max ({}) inclusive (got {})",
                *threshold,
                ShareCount::MAX,
                *share_count
            )));
        }
        Ok(Self {
            secret,
            threshold,
            share_count,
            identifier: None,
            hash_algorithm: HashAlgorithm::default(),
            pad_blocksize: 0,
            format: OutputFormat::default(),
        })
    }

    /// Split configuration with the default 3 of 5 shares
    ///
    /// # Errors
    /// Never fails for the defaults, but shares the signature of [`Self::new`]
    pub fn with_defaults(secret: Secret) -> Result<Self> {
        Self::new(secret, Threshold::default(), ShareCount::default())
    }

    #[must_use]
    pub fn with_identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    #[must_use]
    pub fn with_hash_algorithm(mut self, hash_algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = hash_algorithm;
        self
    }

    /// Left-pad the secret to a multiple of `pad_blocksize` bytes (0 disables)
    #[must_use]
    pub fn with_pad_blocksize(mut self, pad_blocksize: u8) -> Self {
        self.pad_blocksize = pad_blocksize;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// The identifier set with [`Self::with_identifier`], if any
    #[must_use]
    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    #[must_use]
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    #[must_use]
    pub fn pad_blocksize(&self) -> u8 {
        self.pad_blocksize
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Shares to combine and how to pick among them
#[derive(Debug, Clone)]
pub struct CombineConfig {
    shares: Vec<Vec<u8>>,
    select_by: SelectBy,
}

impl CombineConfig {
    pub const MIN_SHARES: usize = 1;

    pub const MAX_SHARES: usize = 255;

    /// Creates a new combine configuration
    ///
    /// Shares may be human (`tss~v1~...`) strings or raw binary octets, but
    /// all of them must use the same form.
    ///
    /// # Errors
    /// Returns an error unless 1..=255 shares are supplied
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tss::domain::{CombineConfig, SelectBy};
    ///
    /// let config = CombineConfig::new(["tss~v1~id~2~AAAA", "tss~v1~id~2~BBBB"])
    ///     .unwrap()
    ///     .with_select_by(SelectBy::Sample);
    /// assert_eq!(config.shares().len(), 2);
    ///
    /// assert!(CombineConfig::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(shares: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let shares: Vec<Vec<u8>> = shares.into_iter().map(|s| s.as_ref().to_vec()).collect();
        if !(Self::MIN_SHARES..=Self::MAX_SHARES).contains(&shares.len()) {
            return Err(TssError::argument(format!(
                "shares must contain between {} and {} shares (got {})",
                Self::MIN_SHARES,
                Self::MAX_SHARES,
                shares.len()
            )));
        }
        Ok(Self {
            shares,
            select_by: SelectBy::default(),
        })
    }

    #[must_use]
    pub fn with_select_by(mut self, select_by: SelectBy) -> Self {
        self.select_by = select_by;
        self
    }

    #[must_use]
    pub fn shares(&self) -> &[Vec<u8>] {
        &self.shares
    }

    #[must_use]
    pub fn select_by(&self) -> SelectBy {
        self.select_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> Secret {
        Secret::new("a").unwrap()
    }

    #[test]
    fn test_threshold_equal_to_share_count() {
        let config =
            SplitConfig::new(secret(), Threshold::new(255).unwrap(), ShareCount::new(255).unwrap());
        assert!(config.is_ok());
    }

    #[test]
    fn test_threshold_exceeds_share_count() {
        let err = SplitConfig::new(secret(), Threshold::new(3).unwrap(), ShareCount::new(2).unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("between threshold value (3)"));
    }

    #[test]
    fn test_defaults() {
        let config = SplitConfig::with_defaults(secret()).unwrap();
        assert_eq!(*config.threshold(), 3);
        assert_eq!(*config.share_count(), 5);
        assert_eq!(config.identifier(), None);
        assert_eq!(config.hash_algorithm(), HashAlgorithm::Sha256);
        assert_eq!(config.pad_blocksize(), 0);
        assert_eq!(config.format(), OutputFormat::Human);
    }

    #[test]
    fn test_builder_setters() {
        let config = SplitConfig::with_defaults(secret())
            .unwrap()
            .with_identifier(Identifier::new("abc").unwrap())
            .with_hash_algorithm(HashAlgorithm::None)
            .with_pad_blocksize(8)
            .with_format(OutputFormat::Binary);
        assert_eq!(config.identifier().map(Identifier::as_str), Some("abc"));
        assert_eq!(config.hash_algorithm(), HashAlgorithm::None);
        assert_eq!(config.pad_blocksize(), 8);
        assert_eq!(config.format(), OutputFormat::Binary);
    }

    #[test]
    fn test_combine_share_count_bounds() {
        assert!(CombineConfig::new(vec![b"x".to_vec(); 255]).is_ok());
        assert!(CombineConfig::new(vec![b"x".to_vec(); 256]).is_err());
        assert!(CombineConfig::new(Vec::<Vec<u8>>::new()).is_err());
    }

    #[test]
    fn test_combine_defaults_to_first() {
        let config = CombineConfig::new(["a"]).unwrap();
        assert_eq!(config.select_by(), SelectBy::First);
    }
}
