//! Splitting a secret into shares
//!
//! The secret is left-padded, its digest appended, and then every byte of
//! that work buffer becomes the constant term of a fresh random polynomial
//! of degree `threshold - 1`. Share `x` receives the value of each
//! polynomial at `x`.

use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::codec::{self, Share, ShareHeader};
use crate::domain::{Identifier, OutputFormat, PAD_BYTE, ShareIndex, SplitConfig};
use crate::error::{Result, TssError};
use crate::field;

/// Largest index plus payload length the 2 byte header field can describe
const MAX_SHARE_LEN: usize = u16::MAX as usize;

/// Builds shares for one [`SplitConfig`]
#[derive(Debug)]
pub struct Splitter<'a> {
    config: &'a SplitConfig,
}

impl<'a> Splitter<'a> {
    #[must_use]
    pub fn new(config: &'a SplitConfig) -> Self {
        Self { config }
    }

    /// Splits the secret into `share_count` shares
    ///
    /// Random polynomial coefficients are drawn from `rng`, which must be a
    /// cryptographically secure generator outside of tests.
    ///
    /// # Errors
    /// Returns [`TssError::Argument`] if the padded secret and digest do not
    /// fit in a share
    pub fn split<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Vec<Share>> {
        let config = self.config;
        let threshold = *config.threshold();
        let share_count = *config.share_count();
        let hash_algorithm = config.hash_algorithm();

        debug!(
            threshold,
            share_count,
            hash_algorithm = %hash_algorithm,
            pad_blocksize = config.pad_blocksize(),
            format = %config.format(),
            "splitting secret"
        );

        let work = self.secret_work_bytes()?;
        let identifier = match config.identifier() {
            Some(identifier) => identifier.clone(),
            None => Identifier::random(rng),
        };
        let share_len = u16::try_from(work.len() + 1)
            .map_err(|_| TssError::argument("secret is too large to fit in a share"))?;

        let indices = (1..=share_count)
            .map(ShareIndex::new)
            .collect::<Result<Vec<_>>>()?;
        let mut payloads: Vec<Vec<u8>> = vec![Vec::with_capacity(work.len()); indices.len()];

        // coefficients[0] is the secret byte, the rest are random
        let mut coefficients = Zeroizing::new(vec![0u8; usize::from(threshold)]);
        for &byte in work.iter() {
            coefficients[0] = byte;
            rng.fill_bytes(&mut coefficients[1..]);

            for (index, payload) in indices.iter().zip(payloads.iter_mut()) {
                payload.push(field::eval(**index, &coefficients)?);
            }
        }

        let header = ShareHeader::new(
            identifier.as_bytes(),
            hash_algorithm.code(),
            threshold,
            share_len,
        )?;

        let shares = indices
            .iter()
            .zip(&payloads)
            .map(|(&index, payload)| {
                let binary = codec::encode_binary(&header, index, payload);
                match config.format() {
                    OutputFormat::Binary => Share::Binary(binary),
                    OutputFormat::Human => Share::Human(codec::encode_human(&header, &binary)),
                }
            })
            .collect();

        debug!(share_len, identifier = %identifier, "split complete");
        Ok(shares)
    }

    /// Padded secret followed by the digest of the unpadded secret
    fn secret_work_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        let secret = self.config.secret().as_bytes();
        let hash_algorithm = self.config.hash_algorithm();
        let pad_len = pad_len(secret.len(), self.config.pad_blocksize());

        let work_len = pad_len + secret.len() + hash_algorithm.byte_len();
        if work_len >= MAX_SHARE_LEN {
            return Err(TssError::argument(format!(
                "secret is too large once padded and hashed ({work_len} bytes, must be less than {MAX_SHARE_LEN})"
            )));
        }

        let mut work = Zeroizing::new(Vec::with_capacity(work_len));
        work.resize(pad_len, PAD_BYTE);
        work.extend_from_slice(secret);
        work.extend_from_slice(&hash_algorithm.digest(secret));
        Ok(work)
    }
}

/// Number of pad bytes needed to reach the next multiple of `blocksize`
fn pad_len(len: usize, blocksize: u8) -> usize {
    match usize::from(blocksize) {
        0 => 0,
        blocksize => len.div_ceil(blocksize) * blocksize - len,
    }
}
