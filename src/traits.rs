//! Core traits for streaming samplers
//!
//! Samplers implement the base [`Sketch`] trait, with [`SamplingSketch`]
//! exposing the retained sample.

use core::fmt::Debug;

use thiserror::Error;

/// Error returned when a summary cannot be computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// The reservoir has not yet received enough observations
    #[error(
        "summary requested before reservoir reached full capacity: \
         {count} of {required} observations"
    )]
    NotFull {
        /// Observations added so far
        count: u64,
        /// Observations needed before a summary is available
        required: usize,
    },
}

/// Core trait for all streaming sketches
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Sampling sketches
pub trait SamplingSketch: Sketch
where
    Self::Item: Sized + Clone,
{
    /// Get current sample
    fn sample(&self) -> &[Self::Item];

    /// Sample size limit
    fn capacity(&self) -> usize;

    /// Current sample size
    fn sample_size(&self) -> usize {
        self.sample().len()
    }
}
