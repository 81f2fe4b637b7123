//! Stream sampling algorithms
//!
//! This module provides a fixed-capacity reservoir for maintaining a random
//! sample of a stream of `f64` observations. Useful when you need order
//! statistics of a stream but can't store all data.
//!
//! # Example
//!
//! ```
//! use fivenum::sampling::Reservoir;
//!
//! let mut reservoir = Reservoir::with_seed(1);
//!
//! // Stream a million values, keep a uniform sample of 100
//! for i in 0..1_000_000 {
//!     reservoir.add(i as f64);
//! }
//!
//! // Each value had equal probability of being sampled
//! assert_eq!(reservoir.sample().len(), 100);
//! ```

mod reservoir;

pub use reservoir::{Reservoir, CAPACITY};
