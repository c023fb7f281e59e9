//! Threshold secret sharing with embedded digests
//!
//! A secret is split into `N` shares, any `M` of which recover it. Shares
//! carry a small header and, unless disabled, a digest of the secret so a
//! bad recombination is detected instead of silently returning garbage.
//!
//! ```rust
//! use tss::domain::{CombineConfig, Secret, SplitConfig};
//!
//! let config = SplitConfig::with_defaults(Secret::new("hello").unwrap()).unwrap();
//! let shares = tss::split(&config).unwrap();
//! assert_eq!(shares.len(), 5);
//!
//! let result = tss::combine(&CombineConfig::new(&shares[1..4]).unwrap()).unwrap();
//! assert_eq!(result.secret, "hello");
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod combiner;
pub mod commands;
pub mod digest;
pub mod domain;
pub mod error;
pub mod field;
pub mod selection;
pub mod splitter;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

pub use codec::Share;
pub use combiner::{CombineResult, Combiner};
pub use digest::HashAlgorithm;
pub use domain::{CombineConfig, SplitConfig};
pub use error::{Result, TssError};
pub use splitter::Splitter;

/// Splits a secret using the operating system RNG
///
/// # Errors
/// See [`Splitter::split`]
pub fn split(config: &SplitConfig) -> Result<Vec<Share>> {
    split_with_rng(config, &mut OsRng)
}

/// Splits a secret drawing polynomial coefficients from `rng`
///
/// # Errors
/// See [`Splitter::split`]
pub fn split_with_rng<R: RngCore + CryptoRng>(config: &SplitConfig, rng: &mut R) -> Result<Vec<Share>> {
    Splitter::new(config).split(rng)
}

/// Recombines shares using the operating system RNG for sampling
///
/// # Errors
/// See [`Combiner::combine`]
pub fn combine(config: &CombineConfig) -> Result<CombineResult> {
    combine_with_rng(config, &mut OsRng)
}

/// Recombines shares, sampling with `rng` when [`domain::SelectBy::Sample`]
/// is selected
///
/// # Errors
/// See [`Combiner::combine`]
pub fn combine_with_rng<R: RngCore + CryptoRng>(
    config: &CombineConfig,
    rng: &mut R,
) -> Result<CombineResult> {
    Combiner::new(config).combine(rng)
}
