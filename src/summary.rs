//! Five-number summaries
//!
//! A [`FiveNumberSummary`] is the tuple (minimum, first quartile, median,
//! third quartile, maximum) describing the spread of a sample.

use core::fmt;

use crate::sampling::CAPACITY;

/// Sorted ranks read from a full reservoir
pub(crate) const RANKS: [usize; 5] = [0, 24, 49, 74, 99];

/// Order statistics of a sample at fixed ranks
///
/// Produced by [`Reservoir::five_number_summary`](crate::Reservoir::five_number_summary).
/// Values are exact order statistics of the retained sample, not interpolated.
///
/// # Example
///
/// ```
/// use fivenum::Reservoir;
///
/// let mut reservoir = Reservoir::with_seed(7);
/// for i in 1..=100 {
///     reservoir.add(i as f64);
/// }
///
/// let summary = reservoir.five_number_summary().unwrap();
/// assert_eq!(summary.median, 50.0);
/// assert_eq!(summary.interquartile_range(), 50.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiveNumberSummary {
    /// Smallest retained value
    pub min: f64,
    /// First quartile (25th percentile by rank)
    pub q1: f64,
    /// Median (50th percentile by rank)
    pub median: f64,
    /// Third quartile (75th percentile by rank)
    pub q3: f64,
    /// Largest retained value
    pub max: f64,
}

impl FiveNumberSummary {
    /// Read the summary ranks from an ascending-sorted full sample
    pub(crate) fn from_sorted(sorted: &[f64; CAPACITY]) -> Self {
        let [min, q1, median, q3, max] = RANKS.map(|rank| sorted[rank]);
        Self {
            min,
            q1,
            median,
            q3,
            max,
        }
    }

    /// Distance between the extremes
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Distance between the quartiles
    pub fn interquartile_range(&self) -> f64 {
        self.q3 - self.q1
    }

    /// The summary as `[min, q1, median, q3, max]`
    pub fn to_array(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

impl From<FiveNumberSummary> for (f64, f64, f64, f64, f64) {
    fn from(s: FiveNumberSummary) -> Self {
        (s.min, s.q1, s.median, s.q3, s.max)
    }
}

impl fmt::Display for FiveNumberSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={} q1={} median={} q3={} max={}",
            self.min, self.q1, self.median, self.q3, self.max
        )
    }
}
