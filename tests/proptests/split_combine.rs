//! Property tests for split/combine workflows

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tss::codec::HEADER_LEN;
use tss::domain::{
    CombineConfig, OutputFormat, PAD_BYTE, Secret, SelectBy, ShareCount, SplitConfig, Threshold,
};
use tss::{HashAlgorithm, TssError};

/// Wrapper for secrets the splitter accepts (non-empty, no leading pad byte)
#[derive(Clone, Debug)]
struct ValidSecret(String);

impl Arbitrary for ValidSecret {
    fn arbitrary(g: &mut Gen) -> Self {
        let text = String::arbitrary(g);
        if text.is_empty() || text.as_bytes()[0] == PAD_BYTE {
            return ValidSecret(format!("s{text}"));
        }
        ValidSecret(text)
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidParams {
    threshold: u8,
    num_shares: u8,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Share count between 1 and 12 keeps the runs fast
        let num_shares = (u8::arbitrary(g) % 12) + 1;
        let threshold = (u8::arbitrary(g) % num_shares) + 1;

        ValidParams {
            threshold,
            num_shares,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct AnyHash(HashAlgorithm);

impl Arbitrary for AnyHash {
    fn arbitrary(g: &mut Gen) -> Self {
        AnyHash(*g.choose(&HashAlgorithm::ALL).unwrap())
    }
}

fn split(
    secret: &ValidSecret,
    params: ValidParams,
    hash: HashAlgorithm,
    pad_blocksize: u8,
    seed: u64,
) -> Vec<Vec<u8>> {
    let config = SplitConfig::new(
        Secret::new(secret.0.as_str()).unwrap(),
        Threshold::new(params.threshold).unwrap(),
        ShareCount::new(params.num_shares).unwrap(),
    )
    .unwrap()
    .with_hash_algorithm(hash)
    .with_pad_blocksize(pad_blocksize)
    .with_format(OutputFormat::Binary);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    tss::split_with_rng(&config, &mut rng)
        .unwrap()
        .iter()
        .map(|s| s.as_bytes().to_vec())
        .collect()
}

fn combine(shares: &[Vec<u8>], select_by: SelectBy, seed: u64) -> tss::Result<tss::CombineResult> {
    let config = CombineConfig::new(shares).unwrap().with_select_by(select_by);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    tss::combine_with_rng(&config, &mut rng)
}

/// Shuffle with a seeded rng so failures reproduce
fn shuffled(mut shares: Vec<Vec<u8>>, seed: u64) -> Vec<Vec<u8>> {
    use rand::seq::SliceRandom;
    shares.shuffle(&mut ChaCha20Rng::seed_from_u64(seed));
    shares
}

/// Any threshold sized subset, in any order, recovers the secret
#[quickcheck]
fn prop_split_combine_round_trip(
    secret: ValidSecret,
    params: ValidParams,
    hash: AnyHash,
    pad_blocksize: u8,
    seed: u64,
) -> bool {
    let shares = split(&secret, params, hash.0, pad_blocksize, seed);
    let mut subset = shuffled(shares, seed);
    subset.truncate(usize::from(params.threshold));

    let Ok(result) = combine(&subset, SelectBy::First, seed) else {
        return false;
    };
    result.secret == secret.0
        && result.hash_alg == hash.0.name()
        && result.threshold == params.threshold
        && result.num_shares_used == usize::from(params.threshold)
}

/// Sampling from the full set recovers the secret
#[quickcheck]
fn prop_sample_recovers(secret: ValidSecret, params: ValidParams, seed: u64) -> bool {
    let shares = split(&secret, params, HashAlgorithm::Sha256, 0, seed);
    combine(&shares, SelectBy::Sample, seed).is_ok_and(|r| r.secret == secret.0)
}

/// One share short of the threshold fails before any field math
#[quickcheck]
fn prop_insufficient_shares_fail(secret: ValidSecret, params: ValidParams, seed: u64) -> bool {
    if params.threshold < 2 {
        return true;
    }
    let mut shares = split(&secret, params, HashAlgorithm::Sha256, 0, seed);
    shares.truncate(usize::from(params.threshold) - 1);

    matches!(
        combine(&shares, SelectBy::First, seed),
        Err(TssError::Argument(msg)) if msg.contains("fewer than threshold")
    )
}

/// Every share has the same length and header, indices run 1..=N
#[quickcheck]
fn prop_shares_are_uniform(secret: ValidSecret, params: ValidParams, pad_blocksize: u8) -> bool {
    let shares = split(&secret, params, HashAlgorithm::Sha1, pad_blocksize, 0);

    shares.len() == usize::from(params.num_shares)
        && shares.iter().all(|s| s[..HEADER_LEN] == shares[0][..HEADER_LEN])
        && shares.iter().all(|s| s.len() == shares[0].len())
        && shares
            .iter()
            .enumerate()
            .all(|(i, s)| usize::from(s[HEADER_LEN]) == i + 1)
}

/// Combinations mode works around a single corrupted share
#[quickcheck]
fn prop_combinations_skip_corrupt_share(
    secret: ValidSecret,
    params: ValidParams,
    victim: usize,
    seed: u64,
) -> bool {
    if params.num_shares <= params.threshold {
        return true;
    }
    let mut shares = split(&secret, params, HashAlgorithm::Sha256, 0, seed);
    let victim = victim % shares.len();
    let last = shares[victim].len() - 1;
    shares[victim][last] ^= 0x5A;

    combine(&shares, SelectBy::Combinations, seed).is_ok_and(|r| r.secret == secret.0)
}
