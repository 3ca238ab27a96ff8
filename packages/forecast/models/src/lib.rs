#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types for polynomial trend fitting and forecasting.
//!
//! These are plain values: a fitted model is never mutated after the fit
//! that produced it.

use serde::{Deserialize, Serialize};

/// A fitted polynomial least-squares model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionModel {
    /// Coefficients in ascending power order: `coefficients[i]` multiplies `x^i`.
    pub coefficients: Vec<f64>,
    /// Coefficient of determination over the fitted sample.
    pub r_squared: f64,
    /// Residual standard error, `sqrt(SSres / (n - degree - 1))`.
    ///
    /// Infinite or NaN when the sample has exactly `degree + 1` points.
    pub standard_error: f64,
}

impl RegressionModel {
    /// Polynomial degree of this model.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

/// A predicted value with a symmetric confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub year: f64,
    pub predicted: f64,
    #[serde(rename = "lowerCI")]
    pub lower: f64,
    #[serde(rename = "upperCI")]
    pub upper: f64,
}

impl ForecastPoint {
    /// Full width of the confidence band.
    #[must_use]
    pub fn interval_width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// In-sample fit and out-of-sample projection for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// One point per historical year, in input order.
    pub historical: Vec<ForecastPoint>,
    /// One point per requested future year, in input order.
    pub future: Vec<ForecastPoint>,
    pub model: RegressionModel,
}

/// A value projected forward at a constant compound growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CagrPoint {
    pub year: f64,
    pub value: f64,
}

/// Difference between what a forecast expected and what was observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    pub year: f64,
    pub expected: f64,
    pub actual: f64,
    /// `expected - actual`; positive when the observation fell short.
    pub gap: f64,
}
