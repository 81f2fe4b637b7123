//! # fivenum
//!
//! Constant-memory five-number summaries of unbounded `f64` streams.
//!
//! A [`Reservoir`] keeps a uniform random sample of 100 observations using
//! reservoir sampling, along with the number of observations seen and the sum
//! of the retained values. Once full it yields an approximate
//! [`FiveNumberSummary`] (min, q1, median, q3, max) of everything it has seen.
//!
//! ## Quick Start
//!
//! ```rust
//! use fivenum::prelude::*;
//!
//! let mut latencies = Reservoir::with_seed(7);
//! for ms in [12.0, 8.5, 40.1, 9.9, 11.2].iter().cycle().take(1_000) {
//!     latencies.add(*ms);
//! }
//!
//! let summary = latencies.five_number_summary()?;
//! println!("latency: {summary}");
//! # Ok::<(), SummaryError>(())
//! ```
//!
//! Summaries are only available once 100 observations have been added:
//!
//! ```rust
//! use fivenum::{Reservoir, SummaryError};
//!
//! let mut reservoir = Reservoir::with_seed(7);
//! reservoir.add(1.0);
//!
//! assert_eq!(
//!     reservoir.five_number_summary(),
//!     Err(SummaryError::NotFull { count: 1, required: 100 })
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support and entropy-seeded
//!   [`Reservoir::new`]. Without it the crate is `no_std` and allocation-free.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod sampling;
pub mod summary;
pub mod traits;

pub mod prelude {
    pub use crate::sampling::Reservoir;
    pub use crate::summary::FiveNumberSummary;
    pub use crate::traits::*;
}

pub use sampling::{Reservoir, CAPACITY};
pub use summary::FiveNumberSummary;
pub use traits::SummaryError;
