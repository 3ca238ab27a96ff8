#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Trend fitting and forecasting for yearly national and district series.
//!
//! [`regression`] fits polynomials by ordinary least squares, solving the
//! normal equations with partially pivoted Gaussian elimination.
//! [`projection`] turns a fit into yearly forecast points with a 95%
//! confidence band that widens with distance past the last observed year.
//! [`growth`] covers compound annual growth and forecast shortfalls.
//!
//! Every function is pure and synchronous.

pub mod growth;
pub mod projection;
pub mod regression;

pub use growth::{calculate_cagr, project_cagr, shortfall};
pub use projection::{
    DEFAULT_DEGREE, FUTURE_WIDENING_PER_YEAR, Z_SCORE_95, best_fit, forecast, sample_curve,
};
pub use regression::{evaluate, fit_polynomial};

use thiserror::Error;

/// Errors that can occur when fitting or projecting a series.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The input cannot produce a model (length mismatch, too few samples,
    /// zero divisor).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what was wrong with the input.
        message: String,
    },
}

impl ForecastError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
