//! Ordinary-least-squares fit of the cost-allocation model.
//!
//! The model regresses total operating cost on fixed (train) hours,
//! incremental (car) hours, and a 0/1 peer-group indicator, with an implicit
//! intercept. The closed-form normal-equations solve runs over a
//! column-equilibrated design: every regressor column is scaled to unit
//! Euclidean norm before `X'X` is formed, and estimates and standard errors
//! are unscaled afterwards. Raw hour counts and dollar costs span several
//! orders of magnitude, and equilibration keeps the normal matrix
//! well-conditioned across that spread.
//!
//! # Aliasing
//!
//! A peer indicator that is constant across every observation carries no
//! information: as a column it is either all zeros or a copy of the
//! intercept. Rather than rejecting the whole fit, the constant column is
//! excluded and its coefficient reported as aliased (estimate zero, no
//! standard error or significance). [`RegressionError::SingularDesign`] is
//! reserved for genuine collinearity among the included regressors.

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::observation::ObservationRow;
use crate::special::two_sided_p_value;

/// Names of the model terms, in result order.
const TERM_NAMES: [&str; 4] = [
    "intercept",
    "fixed_unit_hours",
    "incremental_unit_hours",
    "is_peer",
];

/// Number of model parameters (intercept + 3 regressors).
const PARAMETERS: usize = TERM_NAMES.len();

/// Errors raised by the cost-allocation fit.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RegressionError {
    /// Too few observations to identify the model.
    #[display("underdetermined model: {observations} observations for {parameters} parameters")]
    Underdetermined {
        observations: usize,
        parameters: usize,
    },
    /// The included regressors are perfectly collinear, so the least-squares
    /// solution is not unique.
    #[display("singular design: regressors are perfectly collinear")]
    SingularDesign,
}

/// One fitted model term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    /// Term name (`"intercept"`, `"fixed_unit_hours"`, ...).
    pub name: String,
    /// Point estimate.
    pub estimate: f64,
    /// Standard error under homoscedastic, independent errors.
    ///
    /// `None` for aliased terms and for fits with zero residual variance.
    pub std_error: Option<f64>,
    /// t-statistic (`estimate / std_error`).
    pub t_stat: Option<f64>,
    /// Two-sided p-value from the Student-t distribution on the residual
    /// degrees of freedom.
    pub p_value: Option<f64>,
    /// Whether this term was excluded from the fit as unidentifiable.
    pub aliased: bool,
}

impl Coefficient {
    fn aliased(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            estimate: 0.0,
            std_error: None,
            t_stat: None,
            p_value: None,
            aliased: true,
        }
    }
}

/// Result of one cost-allocation fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// One entry per model term: intercept, fixed hours, incremental hours,
    /// peer indicator, in that order.
    pub coefficients: Vec<Coefficient>,
    /// Fraction of the total cost variance explained by the model.
    pub r_squared: f64,
    /// Residual degrees of freedom (`observations - fitted terms`).
    pub residual_degrees_of_freedom: usize,
}

impl RegressionResult {
    /// Looks up a fitted term by name.
    #[must_use]
    pub fn coefficient(&self, name: &str) -> Option<&Coefficient> {
        self.coefficients.iter().find(|c| c.name == name)
    }
}

/// Fits the cost-allocation model by ordinary least squares.
///
/// # Errors
///
/// * [`RegressionError::Underdetermined`] when the number of observations
///   does not exceed the number of model parameters (4).
/// * [`RegressionError::SingularDesign`] when the included regressors are
///   perfectly collinear (for example, car hours an exact multiple of train
///   hours in every observation).
///
/// # Examples
///
/// ```
/// use farebox_model::observation::ObservationRow;
/// use farebox_model::regression::fit_linear_cost_model;
///
/// // total_cost = 500 * fixed + 100 * incremental, exactly
/// let observations: Vec<_> = [(10.0, 200.0), (20.0, 60.0), (35.0, 310.0), (50.0, 120.0), (8.0, 85.0)]
///     .into_iter()
///     .map(|(f, i)| ObservationRow::new(f, i, false, 500.0 * f + 100.0 * i))
///     .collect();
///
/// let result = fit_linear_cost_model(&observations).unwrap();
/// let fixed = result.coefficient("fixed_unit_hours").unwrap();
/// assert!((fixed.estimate - 500.0).abs() < 1e-6);
/// assert!((result.r_squared - 1.0).abs() < 1e-9);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn fit_linear_cost_model(
    observations: &[ObservationRow],
) -> Result<RegressionResult, RegressionError> {
    let n = observations.len();
    if n <= PARAMETERS {
        return Err(RegressionError::Underdetermined {
            observations: n,
            parameters: PARAMETERS,
        });
    }

    let peer_varies = observations
        .iter()
        .any(|o| o.is_peer != observations[0].is_peer);

    let mut columns: Vec<Vec<f64>> = vec![
        vec![1.0; n],
        observations.iter().map(|o| o.fixed_unit_hours).collect(),
        observations
            .iter()
            .map(|o| o.incremental_unit_hours)
            .collect(),
    ];
    if peer_varies {
        columns.push(
            observations
                .iter()
                .map(ObservationRow::peer_indicator)
                .collect(),
        );
    }
    let p = columns.len();

    // Equilibrate: scale every column to unit Euclidean norm. A zero norm
    // means a zero column, which is collinear with anything.
    let mut norms = Vec::with_capacity(p);
    for column in &columns {
        let norm = column.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Err(RegressionError::SingularDesign);
        }
        norms.push(norm);
    }

    let mut design = Matrix::zeros(n, p);
    for (j, column) in columns.iter().enumerate() {
        for (i, &v) in column.iter().enumerate() {
            design.set(i, j, v / norms[j]);
        }
    }

    let y = Matrix::column(
        &observations
            .iter()
            .map(|o| o.total_cost)
            .collect::<Vec<_>>(),
    );

    let design_t = design.transpose();
    let xtx = design_t.matmul(&design);
    let xty = design_t.matmul(&y);

    let beta_scaled = xtx
        .solve(&xty)
        .map_err(|_| RegressionError::SingularDesign)?;
    let xtx_inv = xtx.inverse().map_err(|_| RegressionError::SingularDesign)?;

    // Residual and total sums of squares in the original cost scale. The
    // scaled design with the scaled coefficients predicts the same values.
    let predicted = design.matmul(&beta_scaled);
    let mut rss = 0.0;
    for i in 0..n {
        let r = y[(i, 0)] - predicted[(i, 0)];
        rss += r * r;
    }
    let mean_cost = observations.iter().map(|o| o.total_cost).sum::<f64>() / n as f64;
    let tss = observations
        .iter()
        .map(|o| (o.total_cost - mean_cost).powi(2))
        .sum::<f64>();

    // Zero total variance means every cost is identical; the intercept-only
    // prediction is exact and the model explains all of nothing.
    let r_squared = if tss == 0.0 { 1.0 } else { 1.0 - rss / tss };

    let df = n - p;
    let sigma2 = rss / df as f64;

    let mut coefficients = Vec::with_capacity(PARAMETERS);
    for (j, name) in TERM_NAMES.iter().enumerate() {
        if j >= p {
            coefficients.push(Coefficient::aliased(name));
            continue;
        }
        let estimate = beta_scaled[(j, 0)] / norms[j];
        let (std_error, t_stat, p_value) = if sigma2 > 0.0 {
            let se = (sigma2 * xtx_inv[(j, j)]).sqrt() / norms[j];
            let t = estimate / se;
            (Some(se), Some(t), Some(two_sided_p_value(t, df as f64)))
        } else {
            (None, None, None)
        };
        coefficients.push(Coefficient {
            name: (*name).to_owned(),
            estimate,
            std_error,
            t_stat,
            p_value,
            aliased: false,
        });
    }

    Ok(RegressionResult {
        coefficients,
        r_squared,
        residual_degrees_of_freedom: df,
    })
}
