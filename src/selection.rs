//! Choosing which shares take part in a reconstruction

use rand::{CryptoRng, RngCore};

/// Largest number of subsets Combinations mode is allowed to try
pub const MAX_COMBINATIONS: u64 = 1_000_000;

/// Number of `k` sized subsets of `n` items, or `None` if it exceeds `ceiling`
///
/// Uses the multiplicative form `C(n-k+i, i) = C(n-k+i-1, i-1) * (n-k+i) / i`,
/// where every step is an exact integer division and the running value only
/// grows, so the loop can stop as soon as the ceiling is passed. Nothing
/// here can overflow for `n` up to 255.
///
/// # Examples
///
/// ```rust
/// use tss::selection::{count_combinations, MAX_COMBINATIONS};
///
/// assert_eq!(count_combinations(5, 3, MAX_COMBINATIONS), Some(10));
/// assert_eq!(count_combinations(255, 128, MAX_COMBINATIONS), None);
/// ```
#[must_use]
pub fn count_combinations(n: usize, k: usize, ceiling: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let base = (n - k) as u64;

    let mut count: u64 = 1;
    for i in 1..=k as u64 {
        count = count * (base + i) / i;
        if count > ceiling {
            return None;
        }
    }
    Some(count)
}

/// Lexicographic iterator over every `k` sized subset of `0..n`
///
/// Yields position lists in ascending order: `[0, 1, 2]`, `[0, 1, 3]`, ...
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    positions: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            positions: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.positions.clone());
        }

        let k = self.positions.len();
        // Rightmost position that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.positions[i] < self.n - k + i) else {
            self.exhausted = true;
            return None;
        };

        self.positions[i] += 1;
        for j in i + 1..k {
            self.positions[j] = self.positions[j - 1] + 1;
        }
        Some(self.positions.clone())
    }
}

/// The first `k` positions in supplied order
#[must_use]
pub fn first(k: usize) -> Vec<usize> {
    (0..k).collect()
}

/// A uniformly random `k` sized subset of `0..n`, in ascending order
#[must_use]
pub fn sample<R: RngCore + CryptoRng>(rng: &mut R, n: usize, k: usize) -> Vec<usize> {
    let mut positions = rand::seq::index::sample(rng, n, k.min(n)).into_vec();
    positions.sort_unstable();
    positions
}
