//! Polynomial least squares.

use nepal_atlas_forecast_models::RegressionModel;

use crate::ForecastError;

/// Fits a polynomial of the given degree to `(xs[i], ys[i])` pairs.
///
/// Builds the design matrix with columns `x^0..=x^degree`, forms the normal
/// equations `(XᵀX)β = Xᵀy` and solves them by Gaussian elimination with
/// partial pivoting.
///
/// A sample of exactly `degree + 1` points interpolates exactly; its
/// standard error has a zero denominator and comes out infinite or NaN.
/// Singular systems (for example every x equal) propagate NaN coefficients.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidInput`] if the slices differ in length,
/// are empty, or hold fewer than `degree + 1` points.
pub fn fit_polynomial(
    xs: &[f64],
    ys: &[f64],
    degree: usize,
) -> Result<RegressionModel, ForecastError> {
    if xs.len() != ys.len() {
        return Err(ForecastError::invalid(format!(
            "x and y lengths differ ({} vs {})",
            xs.len(),
            ys.len()
        )));
    }

    let n = xs.len();
    if n == 0 {
        return Err(ForecastError::invalid("cannot fit an empty series"));
    }
    if degree + 1 > n {
        return Err(ForecastError::invalid(format!(
            "degree {degree} needs at least {} points, got {n}",
            degree + 1
        )));
    }

    let size = degree + 1;
    let mut xtx = vec![vec![0.0; size]; size];
    let mut xty = vec![0.0; size];

    for (&x, &y) in xs.iter().zip(ys) {
        let row = powers(x, size);
        for (i, &xi) in row.iter().enumerate() {
            xty[i] += xi * y;
            for (cell, &xj) in xtx[i].iter_mut().zip(&row) {
                *cell += xi * xj;
            }
        }
    }

    let coefficients = solve(xtx, xty);

    #[allow(clippy::cast_precision_loss)]
    let y_mean = ys.iter().sum::<f64>() / n as f64;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let predicted = evaluate(x, &coefficients);
        ss_res += (y - predicted).powi(2);
        ss_tot += (y - y_mean).powi(2);
    }

    let r_squared = 1.0 - ss_res / ss_tot;
    #[allow(clippy::cast_precision_loss)]
    let standard_error = (ss_res / (n - degree - 1) as f64).sqrt();

    log::debug!(
        "Fitted degree {degree} polynomial to {n} points: R²={r_squared:.4}, SE={standard_error:.4}"
    );

    Ok(RegressionModel {
        coefficients,
        r_squared,
        standard_error,
    })
}

/// Evaluates `Σ coefficients[i] · x^i` using Horner's scheme.
///
/// An empty coefficient list evaluates to zero.
#[must_use]
pub fn evaluate(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc.mul_add(x, c))
}

/// `[1, x, x², ...]` with `count` terms.
fn powers(x: f64, count: usize) -> Vec<f64> {
    std::iter::successors(Some(1.0), |p| Some(p * x))
        .take(count)
        .collect()
}

/// Solves `matrix · β = rhs` for a square system.
///
/// Forward elimination swaps in the row with the largest absolute value in
/// the pivot column (first one on ties) before eliminating below it.
fn solve(matrix: Vec<Vec<f64>>, rhs: Vec<f64>) -> Vec<f64> {
    let n = rhs.len();
    let mut augmented: Vec<Vec<f64>> = matrix
        .into_iter()
        .zip(rhs)
        .map(|(mut row, b)| {
            row.push(b);
            row
        })
        .collect();

    for col in 0..n {
        let pivot = (col + 1..n).fold(col, |best, row| {
            if augmented[row][col].abs() > augmented[best][col].abs() {
                row
            } else {
                best
            }
        });
        augmented.swap(col, pivot);

        let (upper, lower) = augmented.split_at_mut(col + 1);
        let pivot_row = &upper[col];
        for row in lower {
            let factor = row[col] / pivot_row[col];
            for (value, &p) in row[col..].iter_mut().zip(&pivot_row[col..]) {
                *value -= factor * p;
            }
        }
    }

    let mut solution = vec![0.0; n];
    for i in (0..n).rev() {
        let row = &augmented[i];
        let value = row[i + 1..n]
            .iter()
            .zip(&solution[i + 1..])
            .fold(row[n], |acc, (a, x)| acc - a * x);
        solution[i] = value / row[i];
    }

    solution
}
