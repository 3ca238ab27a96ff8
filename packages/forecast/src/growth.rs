//! Compound annual growth and forecast shortfalls.

use nepal_atlas_forecast_models::{CagrPoint, ForecastPoint, Shortfall};

use crate::ForecastError;

/// Compound annual growth rate: `(end / start)^(1 / years) − 1`.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidInput`] if `start` or `years` is zero.
pub fn calculate_cagr(start: f64, end: f64, years: f64) -> Result<f64, ForecastError> {
    if start == 0.0 {
        return Err(ForecastError::invalid("CAGR start value must be non-zero"));
    }
    if years == 0.0 {
        return Err(ForecastError::invalid("CAGR period must be non-zero"));
    }

    Ok((end / start).powf(years.recip()) - 1.0)
}

/// Compounds `base_value` at `rate` from `base_year` to each of `years`.
#[must_use]
pub fn project_cagr(base_year: f64, base_value: f64, rate: f64, years: &[f64]) -> Vec<CagrPoint> {
    years
        .iter()
        .map(|&year| CagrPoint {
            year,
            value: base_value * (1.0 + rate).powf(year - base_year),
        })
        .collect()
}

/// Compares observed `(year, value)` pairs against forecast points.
///
/// Observations whose year has no forecast point are skipped.
#[must_use]
pub fn shortfall(expected: &[ForecastPoint], actual: &[(f64, f64)]) -> Vec<Shortfall> {
    actual
        .iter()
        .filter_map(|&(year, value)| {
            let point = expected
                .iter()
                .find(|p| (p.year - year).abs() < f64::EPSILON)?;
            Some(Shortfall {
                year,
                expected: point.predicted,
                actual: value,
                gap: point.predicted - value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_in_one_year_is_full_growth() {
        assert!((calculate_cagr(100.0, 200.0, 1.0).unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cagr_over_several_years() {
        let rate = calculate_cagr(0.551, 0.601, 11.0).unwrap();
        assert!((0.551 * (1.0 + rate).powi(11) - 0.601).abs() < 1e-12);
    }

    #[test]
    fn cagr_rejects_zero_divisors() {
        assert!(calculate_cagr(0.0, 10.0, 5.0).is_err());
        assert!(calculate_cagr(10.0, 20.0, 0.0).is_err());
    }

    #[test]
    fn projection_compounds_from_base_year() {
        let points = project_cagr(2022.0, 100.0, 0.1, &[2022.0, 2023.0, 2024.0]);

        assert_eq!(points.len(), 3);
        assert!((points[0].value - 100.0).abs() < 1e-9);
        assert!((points[1].value - 110.0).abs() < 1e-9);
        assert!((points[2].value - 121.0).abs() < 1e-9);
    }

    #[test]
    fn shortfall_skips_unforecast_years() {
        let expected = [
            ForecastPoint {
                year: 2020.0,
                predicted: 1_250.0,
                lower: 1_100.0,
                upper: 1_400.0,
            },
            ForecastPoint {
                year: 2021.0,
                predicted: 1_300.0,
                lower: 1_130.0,
                upper: 1_470.0,
            },
        ];
        let actual = [(2020.0, 151.0), (2021.0, 230.0), (2023.0, 1_014.0)];

        let gaps = shortfall(&expected, &actual);
        assert_eq!(gaps.len(), 2);
        assert!((gaps[0].gap - 1_099.0).abs() < 1e-9);
        assert!((gaps[1].actual - 230.0).abs() < f64::EPSILON);
    }
}
