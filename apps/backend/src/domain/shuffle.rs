//! Fisher-Yates shuffling behind an injectable random source.
//!
//! Every random decision the draw engine makes (shuffle swaps and reversal
//! flips) goes through [`RandomSource`], so tests can script them and
//! callers can reproduce a reading from a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of the two kinds of randomness a draw needs.
pub trait RandomSource: Send {
    /// Uniform index in `0..=upper`.
    fn index_upto(&mut self, upper: usize) -> usize;

    /// `true` with probability `p`. Values outside `0.0..=1.0` are clamped.
    fn chance(&mut self, p: f64) -> bool;
}

/// [`RandomSource`] backed by any `rand` generator.
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Non-deterministic source seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RngSource<ChaCha20Rng> {
    /// Reproducible source: the same seed yields the same shuffle and flips.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn index_upto(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }

    fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() || p <= 0.0 {
            false
        } else if p >= 1.0 {
            true
        } else {
            self.rng.random_bool(p)
        }
    }
}

/// Seeded source when a seed is given, OS entropy otherwise.
pub fn source_for_seed(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    }
}

/// In-place Fisher-Yates: walk from the last index down to 1, swapping each
/// slot with a uniformly chosen index in `0..=i`.
pub fn shuffle<T>(items: &mut [T], source: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = source.index_upto(i);
        items.swap(i, j);
    }
}

/// Shuffled copy of `items`; the input is untouched.
pub fn shuffled<T: Clone>(items: &[T], source: &mut dyn RandomSource) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, source);
    out
}
