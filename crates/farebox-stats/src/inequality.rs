//! Lorenz curves and Gini coefficients.
//!
//! Both measures describe how a non-negative quantity is concentrated across
//! a population. The Lorenz curve plots the cumulative share held by the
//! poorest fraction of the population; the Gini coefficient summarizes the
//! same concentration as a single number in `[0, 1]`.
//!
//! The Gini computation here is the discrete rank-based estimator
//!
//! ```text
//! G = sum((2i - n - 1) * v_i) / (n * sum(v))     (v sorted ascending, i 1-based)
//! ```
//!
//! which is what all reported figures use. It is not reconciled with the
//! continuous area-ratio definition, which differs slightly for small n.

use serde::{Deserialize, Serialize};

/// Errors raised by inequality computations.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InequalityError {
    /// The value series is empty or sums to zero, so shares are undefined.
    #[display("degenerate value series: empty or all values are zero")]
    DegenerateInput,
}

/// Cumulative-share ordinates of a Lorenz curve.
///
/// For a series of `n` values the curve has `n + 1` ordinates: a leading
/// `0.0`, then the cumulative share of the total after each value. The final
/// ordinate is exactly `1.0` and the sequence is non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LorenzCurve {
    shares: Vec<f64>,
}

impl LorenzCurve {
    /// The cumulative share ordinates, starting at `0.0` and ending at `1.0`.
    #[must_use]
    pub fn shares(&self) -> &[f64] {
        &self.shares
    }

    /// Number of ordinates (`n + 1` for a series of `n` values).
    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Returns `true` if the curve has no ordinates.
    ///
    /// Never true for a curve built by [`lorenz_curve`], which always emits
    /// the leading `0.0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Computes the Lorenz curve of an ascending value series.
///
/// The input must already be sorted; this routine does not re-sort. An
/// unsorted series is a caller error, not something that is silently
/// corrected.
///
/// # Errors
///
/// Returns [`InequalityError::DegenerateInput`] if `sorted_values` is empty
/// or sums to zero.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use farebox_stats::inequality::lorenz_curve;
///
/// let curve = lorenz_curve(&[10.0, 20.0, 30.0, 40.0]).unwrap();
/// assert_eq!(curve.shares(), &[0.0, 0.1, 0.3, 0.6, 1.0]);
/// ```
pub fn lorenz_curve(sorted_values: &[f64]) -> Result<LorenzCurve, InequalityError> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    if sorted_values.is_empty() {
        return Err(InequalityError::DegenerateInput);
    }

    let mut cumulative = Vec::with_capacity(sorted_values.len() + 1);
    let mut running = 0.0;
    for &v in sorted_values {
        running += v;
        cumulative.push(running);
    }

    let total = running;
    if total == 0.0 {
        return Err(InequalityError::DegenerateInput);
    }

    let mut shares = Vec::with_capacity(cumulative.len() + 1);
    shares.push(0.0);
    // Dividing the final cumulative sum by itself lands the curve on exactly 1.0.
    shares.extend(cumulative.iter().map(|&c| c / total));

    Ok(LorenzCurve { shares })
}

/// Computes the Gini coefficient of a non-negative value series.
///
/// Unlike [`lorenz_curve`], this routine sorts its own copy of the input, so
/// it is safe to call on unsorted data and yields the same result either way.
/// The result lies in `[0, 1]` for non-negative input: `0` is perfect
/// equality, values near `1` mean the total is concentrated in few elements.
///
/// # Errors
///
/// Returns [`InequalityError::DegenerateInput`] if `values` is empty or sums
/// to zero.
///
/// # Examples
///
/// ```
/// use farebox_stats::inequality::gini_coefficient;
///
/// let gini = gini_coefficient(&[0.0, 0.0, 0.0, 10.0]).unwrap();
/// assert!((gini - 0.75).abs() < 1e-9);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn gini_coefficient(values: &[f64]) -> Result<f64, InequalityError> {
    if values.is_empty() {
        return Err(InequalityError::DegenerateInput);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let total = sorted.iter().sum::<f64>();
    if total == 0.0 {
        return Err(InequalityError::DegenerateInput);
    }

    let n = sorted.len() as f64;
    let weighted = sorted
        .iter()
        .enumerate()
        .map(|(i, &v)| (2.0 * (i as f64 + 1.0) - n - 1.0) * v)
        .sum::<f64>();

    Ok(weighted / (n * total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lorenz_known_curve() {
        let curve = lorenz_curve(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(curve.shares(), &[0.0, 0.1, 0.3, 0.6, 1.0]);
        assert_eq!(curve.len(), 5);
    }

    #[test]
    fn test_lorenz_starts_at_zero_ends_at_one() {
        let values = [1.0, 4.0, 9.0, 16.0, 25.0, 36.0];
        let curve = lorenz_curve(&values).unwrap();
        let shares = curve.shares();
        assert_eq!(shares[0], 0.0);
        assert_eq!(*shares.last().unwrap(), 1.0);
    }

    #[test]
    fn test_lorenz_is_non_decreasing() {
        let values = [0.0, 0.5, 2.0, 2.0, 7.5, 100.0];
        let curve = lorenz_curve(&values).unwrap();
        assert!(curve.shares().is_sorted_by(|a, b| a <= b));
    }

    #[test]
    fn test_lorenz_rejects_empty_series() {
        assert!(matches!(
            lorenz_curve(&[]),
            Err(InequalityError::DegenerateInput)
        ));
    }

    #[test]
    fn test_lorenz_rejects_zero_total() {
        assert!(matches!(
            lorenz_curve(&[0.0, 0.0, 0.0]),
            Err(InequalityError::DegenerateInput)
        ));
    }

    #[test]
    #[should_panic(expected = "sorted in ascending order")]
    fn test_lorenz_panics_on_unsorted_input() {
        let _ = lorenz_curve(&[3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_gini_perfect_equality_is_zero() {
        let gini = gini_coefficient(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert!(gini.abs() < 1e-9);

        let gini = gini_coefficient(&[7.25; 40]).unwrap();
        assert!(gini.abs() < 1e-9);
    }

    #[test]
    fn test_gini_all_mass_in_one_element() {
        let gini = gini_coefficient(&[0.0, 0.0, 0.0, 10.0]).unwrap();
        assert!((gini - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_gini_maximal_inequality_approaches_one() {
        // With all mass in the last of n elements the estimator gives (n-1)/n.
        for n in [2_usize, 10, 100, 1000] {
            let mut values = vec![0.0; n];
            values[n - 1] = 42.0;
            let gini = gini_coefficient(&values).unwrap();
            #[expect(clippy::cast_precision_loss)]
            let expected = (n as f64 - 1.0) / n as f64;
            assert!((gini - expected).abs() < 1e-9, "n = {n}");
        }
    }

    #[test]
    fn test_gini_is_sort_independent_and_idempotent() {
        let unsorted = [5.0, 1.0, 3.0, 2.0, 4.0];
        let mut sorted = unsorted;
        sorted.sort_by(f64::total_cmp);

        let a = gini_coefficient(&unsorted).unwrap();
        let b = gini_coefficient(&unsorted).unwrap();
        let c = gini_coefficient(&sorted).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_gini_rejects_degenerate_input() {
        assert!(matches!(
            gini_coefficient(&[]),
            Err(InequalityError::DegenerateInput)
        ));
        assert!(matches!(
            gini_coefficient(&[0.0, 0.0]),
            Err(InequalityError::DegenerateInput)
        ));
    }

    #[test]
    fn test_lorenz_curve_serde_round_trip() {
        let curve = lorenz_curve(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        let back: LorenzCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(curve, back);
    }
}
