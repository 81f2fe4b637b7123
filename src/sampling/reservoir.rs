//! Reservoir sampling for five-number summaries
//!
//! [`Reservoir`] keeps a uniform random sample of 100 values from a stream
//! of unknown length. Each observation in the stream has equal probability
//! of being retained, so order statistics of the sample approximate those of
//! the whole stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::summary::FiveNumberSummary;
use crate::traits::{SamplingSketch, Sketch, SummaryError};

/// Number of slots in a [`Reservoir`]
pub const CAPACITY: usize = 100;

/// Fixed-capacity reservoir sampler using Algorithm R
///
/// Maintains a uniform random sample of [`CAPACITY`] observations, the total
/// number of observations seen, and the sum of the values currently retained.
/// After `n > 100` observations every one of them is retained with probability
/// `100 / n`, independent of arrival order.
///
/// # Algorithm
///
/// Algorithm R (Vitter, 1985; Li, 1994):
/// 1. Fill the reservoir with the first 100 observations
/// 2. For each subsequent observation n (1-indexed):
///    - Generate random i in [0, n)
///    - If i < 100, replace slot i with observation n
///
/// # Random Source
///
/// Each reservoir owns its generator. [`Reservoir::with_seed`] gives a
/// reproducible ChaCha8 stream, [`Reservoir::with_rng`] accepts any
/// [`rand::Rng`].
///
/// # Thread Safety
///
/// No internal synchronization. Share across threads behind a `Mutex`.
///
/// # Example
///
/// ```
/// use fivenum::Reservoir;
///
/// let mut latencies = Reservoir::with_seed(42);
///
/// for ms in 0..10_000 {
///     latencies.add((ms % 250) as f64);
/// }
///
/// assert_eq!(latencies.count(), 10_000);
///
/// let summary = latencies.five_number_summary().unwrap();
/// assert!(summary.min <= summary.median && summary.median <= summary.max);
/// ```
#[derive(Clone, Debug)]
pub struct Reservoir<R = ChaCha8Rng> {
    /// Retained sample; only `..len()` is populated
    buffer: [f64; CAPACITY],
    /// Number of observations seen
    count: u64,
    /// Sum of the retained values
    sum: f64,
    /// Random number generator
    rng: R,
}

#[cfg(feature = "std")]
impl Reservoir<ChaCha8Rng> {
    /// Create an empty reservoir seeded from operating system entropy
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }
}

#[cfg(feature = "std")]
impl Default for Reservoir<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Reservoir<ChaCha8Rng> {
    /// Create an empty reservoir with a reproducible random stream
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the ChaCha8 generator
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Reservoir<R> {
    /// Create an empty reservoir drawing replacement slots from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            buffer: [0.0; CAPACITY],
            count: 0,
            sum: 0.0,
            rng,
        }
    }

    /// Add an observation
    ///
    /// Any `f64` is accepted, including NaN and infinities.
    pub fn add(&mut self, value: f64) {
        self.count += 1;

        if self.count <= CAPACITY as u64 {
            self.buffer[(self.count - 1) as usize] = value;
            self.sum += value;
            if self.count == CAPACITY as u64 {
                tracing::debug!(count = self.count, "reservoir reached capacity");
            }
            return;
        }

        let i = self.rng.gen_range(0..self.count);
        if i >= CAPACITY as u64 {
            return;
        }

        let slot = i as usize;
        let evicted = core::mem::replace(&mut self.buffer[slot], value);
        // Recomputed over the fixed buffer: subtracting an evicted NaN, inf or
        // large magnitude would leave its residue in the sum.
        self.sum = self.buffer.iter().sum();
        tracing::trace!(slot, evicted, value, "replaced sample");
    }
}

impl<R> Reservoir<R> {
    /// Compute (min, q1, median, q3, max) of the retained sample
    ///
    /// Sorts a copy of the buffer and reads ranks 0, 24, 49, 74 and 99. The
    /// live buffer is never reordered. NaN sorts above `+inf`.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::NotFull`] until 100 observations have been added.
    pub fn five_number_summary(&self) -> Result<FiveNumberSummary, SummaryError> {
        if !self.is_full() {
            tracing::debug!(count = self.count, "summary requested before reservoir is full");
            return Err(SummaryError::NotFull {
                count: self.count,
                required: CAPACITY,
            });
        }

        let mut scratch = self.buffer;
        scratch.sort_unstable_by(f64::total_cmp);
        Ok(FiveNumberSummary::from_sorted(&scratch))
    }

    /// Get the number of observations seen
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Get the sum of the values currently retained
    ///
    /// This is not the sum of every observation: evicted values are excluded.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Get the retained sample
    pub fn sample(&self) -> &[f64] {
        &self.buffer[..self.len()]
    }

    /// Get the reservoir capacity
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Get the current sample size
    pub fn len(&self) -> usize {
        self.count.min(CAPACITY as u64) as usize
    }

    /// Check if no observations have been added
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if reservoir is full
    pub fn is_full(&self) -> bool {
        self.count >= CAPACITY as u64
    }

    /// Mean of the retained sample, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.sum / self.len() as f64)
        }
    }

    /// Get the sampling probability for the current state
    ///
    /// This is the probability that any given observation from the stream
    /// is in the current sample.
    pub fn sampling_probability(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            ((CAPACITY as f64) / (self.count as f64)).min(1.0)
        }
    }
}

impl<R: Rng> Extend<f64> for Reservoir<R> {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<R: Rng + Clone + core::fmt::Debug> Sketch for Reservoir<R> {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl<R: Rng + Clone + core::fmt::Debug> SamplingSketch for Reservoir<R> {
    fn sample(&self) -> &[f64] {
        Reservoir::sample(self)
    }

    fn capacity(&self) -> usize {
        CAPACITY
    }
}
