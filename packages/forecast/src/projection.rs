//! Forecast points with confidence bands, model selection and curve sampling.

use nepal_atlas_forecast_models::{Forecast, ForecastPoint, RegressionModel};

use crate::ForecastError;
use crate::regression::{evaluate, fit_polynomial};

/// Two-sided 95% normal quantile used for every confidence band.
///
/// Applied regardless of sample size; no t-distribution correction.
pub const Z_SCORE_95: f64 = 1.96;

/// Fractional growth of the future confidence margin per year past the last
/// observed year.
pub const FUTURE_WIDENING_PER_YEAR: f64 = 0.1;

/// Polynomial degree used by the dashboard forecasts.
pub const DEFAULT_DEGREE: usize = 2;

/// Fits `historical_y` against `historical_x` and projects the model.
///
/// Historical points carry a margin of `Z_SCORE_95 × SE`. Future points
/// carry `Z_SCORE_95 × SE × (1 + (x − max(historical_x)) × 0.1)`, so the
/// band widens linearly the further out the year is.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidInput`] if the historical series cannot
/// be fitted at `degree`.
pub fn forecast(
    historical_x: &[f64],
    historical_y: &[f64],
    future_x: &[f64],
    degree: usize,
) -> Result<Forecast, ForecastError> {
    let model = fit_polynomial(historical_x, historical_y, degree)?;
    let base_margin = Z_SCORE_95 * model.standard_error;
    let last_observed = historical_x
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let historical = historical_x
        .iter()
        .map(|&x| band(x, &model, base_margin))
        .collect();

    let future = future_x
        .iter()
        .map(|&x| {
            let widening = (x - last_observed).mul_add(FUTURE_WIDENING_PER_YEAR, 1.0);
            band(x, &model, base_margin * widening)
        })
        .collect();

    Ok(Forecast {
        historical,
        future,
        model,
    })
}

fn band(x: f64, model: &RegressionModel, margin: f64) -> ForecastPoint {
    let predicted = evaluate(x, &model.coefficients);
    ForecastPoint {
        year: x,
        predicted,
        lower: predicted - margin,
        upper: predicted + margin,
    }
}

/// Fits every degree in `degrees` and returns the model with the highest R².
///
/// Ties keep the earlier degree. A NaN R² never wins a comparison.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidInput`] if `degrees` is empty or any
/// requested degree cannot be fitted.
pub fn best_fit(
    xs: &[f64],
    ys: &[f64],
    degrees: &[usize],
) -> Result<RegressionModel, ForecastError> {
    let mut best: Option<RegressionModel> = None;

    for &degree in degrees {
        let model = fit_polynomial(xs, ys, degree)?;
        let improves = best
            .as_ref()
            .is_none_or(|current| model.r_squared > current.r_squared);
        if improves {
            best = Some(model);
        }
    }

    best.ok_or_else(|| ForecastError::invalid("no candidate degrees given"))
}

/// Samples the fitted curve at `points` evenly spaced x values from `from`
/// to `to` inclusive.
#[must_use]
pub fn sample_curve(model: &RegressionModel, from: f64, to: f64, points: usize) -> Vec<(f64, f64)> {
    match points {
        0 => Vec::new(),
        1 => vec![(from, evaluate(from, &model.coefficients))],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (to - from) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let x = (i as f64).mul_add(step, from);
                    (x, evaluate(x, &model.coefficients))
                })
                .collect()
        }
    }
}
