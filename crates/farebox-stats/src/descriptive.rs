//! Descriptive statistics for expense datasets.
//!
//! The reporting layer compares revenue-hour cost ratios across agencies,
//! and the figure it leans on most is the coefficient of variation: the
//! standard deviation expressed as a fraction of the mean, which makes
//! dispersion comparable between a ratio near 200 $/hour and one near 20.

/// Summary statistics for one dataset of cost ratios or expense values.
///
/// Location (mean, median), spread (variance, standard deviation), the data
/// range, and the scale-free coefficient of variation, all in `f64`.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// Smallest value in the dataset.
    pub min: f64,
    /// Largest value in the dataset.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (upper median for even-sized datasets).
    pub median: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Coefficient of variation (`std_dev / mean`).
    ///
    /// `None` when the mean is zero, where the ratio is undefined.
    pub coefficient_of_variation: Option<f64>,
}

impl DescriptiveStats {
    /// Summarizes a dataset, sorting a copy of it first.
    ///
    /// Returns `None` for an empty dataset; every statistic is defined once
    /// there is at least one value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use farebox_stats::descriptive::DescriptiveStats;
    /// // Cost per revenue hour for five agencies
    /// let ratios = [188.0, 140.0, 251.0, 112.0, 164.0];
    /// let stats = DescriptiveStats::new(ratios).unwrap();
    /// assert_eq!(stats.min, 112.0);
    /// assert_eq!(stats.median, 164.0);
    /// assert_eq!(stats.mean, 171.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Summarizes an already ascending dataset without re-sorting.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let n = sorted_values.len() as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = sorted_values[sorted_values.len() / 2];

        let squared_deviations = sorted_values.iter().map(|v| (v - mean).powi(2));
        let variance = squared_deviations.sum::<f64>() / n;
        let std_dev = variance.sqrt();
        let coefficient_of_variation = (mean != 0.0).then(|| std_dev / mean);

        Some(Self {
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
            coefficient_of_variation,
        })
    }
}
