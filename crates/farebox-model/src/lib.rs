//! Cost-allocation regression for transit operating expenses.
//!
//! This crate fits an ordinary-least-squares model expressing an agency's
//! total operating cost as a weighted sum of fixed (train) service hours,
//! incremental (car) service hours, and a peer-group indicator:
//!
//! ```text
//! total_cost = b0 + b1 * fixed_unit_hours + b2 * incremental_unit_hours + b3 * is_peer
//! ```
//!
//! The fit reports per-coefficient point estimates, standard errors, and
//! two-sided Student-t significance, plus the overall R². OLS has a
//! closed-form solution, so no iterative optimization is involved; the solve
//! runs over a column-equilibrated design to stay stable when regressor
//! magnitudes span several orders of magnitude (raw hour counts versus
//! dollar costs).
//!
//! # Modules
//!
//! - [`observation`]: The typed observation row consumed by the fit
//! - [`regression`]: The OLS fit and its result types
//! - [`matrix`]: A minimal dense-matrix primitive (transpose, multiply, solve)
//! - [`special`]: Gamma/beta special functions backing the t-distribution
//!
//! # Examples
//!
//! ```
//! use farebox_model::observation::ObservationRow;
//! use farebox_model::regression::fit_linear_cost_model;
//!
//! let observations: Vec<_> = [
//!     (12.0, 48.0, 31000.0),
//!     (20.0, 95.0, 49500.0),
//!     (35.0, 140.0, 81500.0),
//!     (50.0, 260.0, 101000.0),
//!     (8.0, 30.0, 27000.0),
//!     (61.0, 305.0, 121000.0),
//! ]
//! .into_iter()
//! .map(|(fixed, incremental, cost)| ObservationRow::new(fixed, incremental, false, cost))
//! .collect();
//!
//! let result = fit_linear_cost_model(&observations).unwrap();
//! assert!(result.r_squared > 0.9);
//! ```

pub mod matrix;
pub mod observation;
pub mod regression;
pub mod special;

pub use self::observation::ObservationRow;
pub use self::regression::{
    Coefficient, RegressionError, RegressionResult, fit_linear_cost_model,
};
