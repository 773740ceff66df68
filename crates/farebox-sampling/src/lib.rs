//! Synthetic sample generation for inequality analysis.
//!
//! This crate produces ordered sequences of non-negative integer values drawn
//! from two Poisson-distributed sub-populations. The resulting skewed
//! distribution stands in for real investment or expense data when
//! illustrating Lorenz curves and Gini coefficients.
//!
//! # How Generation Works
//!
//! 1. **Configure** ([`SampleConfig`]): two rate ranges and two sub-population sizes
//! 2. **Draw rates**: for each value, a Poisson rate is drawn uniformly from its range
//! 3. **Draw values**: one Poisson sample per rate
//! 4. **Sort**: both sub-populations are concatenated and sorted ascending
//!
//! # Reproducibility
//!
//! The random number generator is supplied by the caller rather than taken
//! from process-global state, so the same generator state always produces the
//! same sample. For a fixed-seed convenience path, see [`SampleSeed`] and
//! [`generate_sample_seeded`].
//!
//! # Examples
//!
//! ```
//! use farebox_sampling::{RateRange, SampleConfig, generate_sample_seeded};
//!
//! let config = SampleConfig::new(
//!     RateRange::new(1, 10).unwrap(),
//!     RateRange::new(50, 100).unwrap(),
//!     90,
//!     10,
//! )
//! .unwrap();
//!
//! let seed = [7; 16].into();
//! let sample = generate_sample_seeded(&config, seed);
//! assert_eq!(sample.len(), 100);
//! assert!(sample.is_sorted());
//! ```

pub mod sample;

pub use self::sample::{
    RateRange, SampleConfig, SampleError, SampleSeed, generate_sample, generate_sample_seeded,
};
