//! Inequality and descriptive statistics for expense analysis.
//!
//! This crate provides the numerical core used to describe how unevenly a
//! quantity (operating expense, investment, revenue hours) is distributed
//! across a population of agencies or accounts:
//!
//! - **Lorenz curves**: cumulative-share ordinates for plotting concentration
//! - **Gini coefficients**: a single [0, 1] summary of inequality
//! - **Descriptive statistics**: mean, median, dispersion, and the
//!   coefficient of variation used to compare cost ratios across agencies
//!
//! # Modules
//!
//! - [`inequality`]: Lorenz curve and Gini coefficient computation
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//!
//! # Examples
//!
//! ## Computing a Lorenz curve
//!
//! ```
//! use farebox_stats::inequality::lorenz_curve;
//!
//! let values = [10.0, 20.0, 30.0, 40.0];
//! let curve = lorenz_curve(&values).unwrap();
//! assert_eq!(curve.shares(), &[0.0, 0.1, 0.3, 0.6, 1.0]);
//! ```
//!
//! ## Computing a Gini coefficient
//!
//! ```
//! use farebox_stats::inequality::gini_coefficient;
//!
//! // Perfect equality
//! let gini = gini_coefficient(&[1.0, 1.0, 1.0, 1.0]).unwrap();
//! assert!(gini.abs() < 1e-9);
//!
//! // All mass in one element
//! let gini = gini_coefficient(&[0.0, 0.0, 0.0, 10.0]).unwrap();
//! assert!((gini - 0.75).abs() < 1e-9);
//! ```
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use farebox_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```

pub mod descriptive;
pub mod inequality;
