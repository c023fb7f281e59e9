//! Combining shares back into a secret
//!
//! Shares are validated as a group before any field math runs: one form,
//! identical headers, identical lengths and at least `threshold` of them.
//! A subset of `threshold` shares is then interpolated at zero byte by byte,
//! the left padding is stripped and the embedded digest is checked.

use std::collections::HashSet;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::{CryptoRng, RngCore};
use serde::Serialize;
use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::codec::{self, HEADER_LEN, ShareHeader};
use crate::digest::HashAlgorithm;
use crate::domain::{CombineConfig, PAD_BYTE, SelectBy, ShareIndex};
use crate::error::{Result, TssError};
use crate::field;
use crate::selection::{self, Combinations, MAX_COMBINATIONS};

/// A recovered secret and what was learned while recovering it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombineResult {
    pub secret: String,
    pub identifier: String,
    pub hash_alg: String,
    /// Lowercase hex digest of the secret, absent for unhashed shares
    pub hash: Option<String>,
    pub threshold: u8,
    pub num_shares_provided: usize,
    pub num_shares_used: usize,
    pub select_by: SelectBy,
    /// Subsets tried before one verified, only set in combinations mode
    pub combinations: Option<u64>,
    pub processing_started_at: DateTime<Utc>,
    pub processing_finished_at: DateTime<Utc>,
    pub processing_time_ms: f64,
}

/// What a single interpolation attempt produced
enum Candidate {
    Verified(Zeroizing<Vec<u8>>),
    HashMismatch,
    Empty,
}

/// Recovers the secret for one [`CombineConfig`]
#[derive(Debug)]
pub struct Combiner<'a> {
    config: &'a CombineConfig,
}

impl<'a> Combiner<'a> {
    #[must_use]
    pub fn new(config: &'a CombineConfig) -> Self {
        Self { config }
    }

    /// Recombines the shares
    ///
    /// `rng` is only consulted by [`SelectBy::Sample`].
    ///
    /// # Errors
    /// - [`TssError::Argument`] for malformed or inconsistent shares, too few
    ///   shares, or combinations mode that is unhashed or too large
    /// - [`TssError::InvalidSecretHash`] if the recovered secret does not
    ///   match its digest
    /// - [`TssError::NoSecret`] if nothing verifiable could be recovered
    /// - [`TssError::Fatal`] for unsupported hash codes
    pub fn combine<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<CombineResult> {
        let started_at = Utc::now();
        let timer = Instant::now();
        let select_by = self.config.select_by();

        let shares = binary_shares(self.config.shares())?;
        let header = validate_shares(&shares)?;
        let hash_algorithm = header.hash_algorithm()?;
        let threshold = usize::from(header.threshold());
        let bodies: Vec<&[u8]> = shares.iter().map(|s| &s[HEADER_LEN..]).collect();

        debug!(
            %select_by,
            %hash_algorithm,
            threshold,
            provided = shares.len(),
            "combining shares"
        );

        let (secret, combinations) = match select_by {
            SelectBy::First => {
                let positions = selection::first(threshold);
                (recover(&bodies, &positions, hash_algorithm)?, None)
            }
            SelectBy::Sample => {
                let positions = selection::sample(rng, bodies.len(), threshold);
                (recover(&bodies, &positions, hash_algorithm)?, None)
            }
            SelectBy::Combinations => {
                let (secret, tried) = recover_any(&bodies, threshold, hash_algorithm)?;
                (secret, Some(tried))
            }
        };

        let hash = hash_algorithm.hex_digest(&secret);
        let secret = String::from_utf8(secret.to_vec())
            .map_err(|_| TssError::no_secret("invalid shares, recovered secret is not valid UTF-8"))?;

        let elapsed = timer.elapsed();
        info!(elapsed_ms = elapsed.as_millis() as u64, "secret recovered");

        Ok(CombineResult {
            secret,
            identifier: header.identifier_lossy(),
            hash_alg: hash_algorithm.name().to_string(),
            hash,
            threshold: header.threshold(),
            num_shares_provided: shares.len(),
            num_shares_used: threshold,
            select_by,
            combinations,
            processing_started_at: started_at,
            processing_finished_at: Utc::now(),
            processing_time_ms: (elapsed.as_secs_f64() * 100_000.0).round() / 100.0,
        })
    }
}

/// Decodes human shares, leaving binary shares as they are
fn binary_shares(shares: &[Vec<u8>]) -> Result<Vec<Vec<u8>>> {
    let human = shares
        .iter()
        .filter(|s| codec::has_human_prefix(s))
        .count();

    if human == 0 {
        return Ok(shares.to_vec());
    }
    if human != shares.len() {
        return Err(TssError::argument(
            "invalid shares, human and binary format shares cannot be mixed",
        ));
    }

    shares
        .iter()
        .map(|s| {
            let text = std::str::from_utf8(s).map_err(|_| {
                TssError::argument(
                    "invalid shares, some human format shares do not match expected pattern",
                )
            })?;
            codec::decode_human(text)
        })
        .collect()
}

/// Group checks run before any interpolation, returning the common header
fn validate_shares(shares: &[Vec<u8>]) -> Result<ShareHeader> {
    let headers = shares
        .iter()
        .map(|s| ShareHeader::decode(s))
        .collect::<Result<Vec<_>>>()?;
    let (first, rest) = headers
        .split_first()
        .ok_or_else(|| TssError::argument("invalid shares, none provided"))?;

    if first.threshold() == 0 || rest.iter().any(|h| h != first) {
        return Err(TssError::argument("invalid shares, bad headers"));
    }
    first.hash_algorithm()?;

    let len = shares[0].len();
    if shares.iter().any(|s| s.len() != len) {
        return Err(TssError::argument("invalid shares, different byte lengths"));
    }
    if len <= HEADER_LEN + 1 {
        return Err(TssError::argument("invalid shares, too short"));
    }
    if shares.len() < usize::from(first.threshold()) {
        return Err(TssError::argument("invalid shares, fewer than threshold"));
    }

    Ok(first.clone())
}

/// Every share in the pool needs a non-zero index, and no two may repeat
fn validate_indices(bodies: &[&[u8]]) -> Result<()> {
    let mut seen = HashSet::with_capacity(bodies.len());
    for body in bodies {
        let index = body
            .first()
            .copied()
            .ok_or_else(|| TssError::argument("invalid shares, no index"))?;
        if !seen.insert(ShareIndex::new(index)?) {
            return Err(TssError::argument("invalid shares, duplicate indexes"));
        }
    }
    Ok(())
}

/// Recovers from exactly the shares at `positions`, failing on any mismatch
fn recover(
    bodies: &[&[u8]],
    positions: &[usize],
    hash_algorithm: HashAlgorithm,
) -> Result<Zeroizing<Vec<u8>>> {
    let selected: Vec<&[u8]> = positions.iter().map(|&p| bodies[p]).collect();
    validate_indices(&selected)?;

    match interpolate_secret(&selected, hash_algorithm)? {
        Candidate::Verified(secret) => Ok(secret),
        Candidate::HashMismatch => Err(TssError::invalid_hash(
            "invalid shares, hash of secret does not equal embedded hash",
        )),
        Candidate::Empty => Err(TssError::no_secret(
            "invalid shares, unable to recombine into a verifiable secret",
        )),
    }
}

/// Tries every `threshold` sized subset until one verifies
///
/// Returns the secret along with the number of subsets tried.
fn recover_any(
    bodies: &[&[u8]],
    threshold: usize,
    hash_algorithm: HashAlgorithm,
) -> Result<(Zeroizing<Vec<u8>>, u64)> {
    if !hash_algorithm.is_verifiable() {
        return Err(TssError::argument(
            "invalid options, combinations mode can only be used with hashed shares",
        ));
    }
    let count = selection::count_combinations(bodies.len(), threshold, MAX_COMBINATIONS)
        .ok_or_else(|| {
            TssError::argument(format!(
                "invalid options, too many combinations (more than {MAX_COMBINATIONS})"
            ))
        })?;
    validate_indices(bodies)?;

    for (tried, positions) in (1u64..).zip(Combinations::new(bodies.len(), threshold)) {
        let selected: Vec<&[u8]> = positions.iter().map(|&p| bodies[p]).collect();
        match interpolate_secret(&selected, hash_algorithm)? {
            Candidate::Verified(secret) => {
                debug!(tried, count, ?positions, "combination verified");
                return Ok((secret, tried));
            }
            Candidate::HashMismatch | Candidate::Empty => {
                debug!(?positions, "combination failed verification");
            }
        }
    }

    warn!(count, "no combination of shares verified");
    Err(TssError::no_secret(
        "invalid shares, no combination of shares recombines into a verifiable secret",
    ))
}

/// Interpolates every payload position at zero, then strips and verifies
fn interpolate_secret(bodies: &[&[u8]], hash_algorithm: HashAlgorithm) -> Result<Candidate> {
    let u: Vec<u8> = bodies.iter().map(|b| b[0]).collect();
    let weights = field::basis_weights(&u)?;
    let len = bodies[0].len();

    let mut work = Zeroizing::new(Vec::with_capacity(len - 1));
    let mut v = Zeroizing::new(vec![0u8; bodies.len()]);
    for position in 1..len {
        for (value, body) in v.iter_mut().zip(bodies) {
            *value = body[position];
        }
        work.push(field::weighted_sum(&weights, &v));
    }

    let pad_len = work.iter().take_while(|&&b| b == PAD_BYTE).count();
    work.drain(..pad_len);

    if !hash_algorithm.is_verifiable() {
        return Ok(if work.is_empty() {
            Candidate::Empty
        } else {
            Candidate::Verified(work)
        });
    }

    let Some(secret_len) = work.len().checked_sub(hash_algorithm.byte_len()) else {
        return Ok(Candidate::HashMismatch);
    };
    let (secret, embedded) = work.split_at(secret_len);
    if bool::from(hash_algorithm.digest(secret).ct_eq(embedded)) {
        work.truncate(secret_len);
        Ok(Candidate::Verified(work))
    } else {
        Ok(Candidate::HashMismatch)
    }
}
