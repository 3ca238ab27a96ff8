//! CSV export of forecasts and scores.
//!
//! Headers come from the row types' field names.

use std::io::Write;
use std::path::Path;

use nepal_atlas_forecast_models::{Forecast, ForecastPoint};
use nepal_atlas_scoring_models::DistrictRisk;
use serde::Serialize;

use crate::series::Series;

/// Placeholder written for years with no observation.
const NOT_OBSERVED: &str = "N/A";

/// One forecast year as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastRow {
    pub year: String,
    pub actual: String,
    pub predicted: String,
    #[serde(rename = "lower_CI")]
    pub lower_ci: String,
    #[serde(rename = "upper_CI")]
    pub upper_ci: String,
    pub model: String,
}

impl ForecastRow {
    fn new(point: &ForecastPoint, actual: Option<f64>, model: &str) -> Self {
        Self {
            year: point.year.to_string(),
            actual: actual.map_or_else(|| NOT_OBSERVED.to_string(), |v| format!("{v:.4}")),
            predicted: format!("{:.4}", point.predicted),
            lower_ci: format!("{:.4}", point.lower),
            upper_ci: format!("{:.4}", point.upper),
            model: model.to_string(),
        }
    }
}

/// Historical then future rows for `forecast`, joined to the observations.
#[must_use]
pub fn forecast_rows(forecast: &Forecast, series: &Series) -> Vec<ForecastRow> {
    let model = format!("Polynomial Degree {}", forecast.model.degree());

    forecast
        .historical
        .iter()
        .chain(&forecast.future)
        .map(|point| ForecastRow::new(point, series.value_at(point.year), &model))
        .collect()
}

/// A ranked risk with its factors flattened into one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRow {
    pub district: String,
    pub risk_level: String,
    pub risk_score: u32,
    pub factors: String,
}

impl From<&DistrictRisk> for RiskRow {
    fn from(risk: &DistrictRisk) -> Self {
        Self {
            district: risk.district.clone(),
            risk_level: risk.risk_level.to_string(),
            risk_score: risk.risk_score,
            factors: risk.factors.join("; "),
        }
    }
}

/// Writes `rows` with a header row to `writer`.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] if serialization or writing fails.
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `rows` to a new CSV file at `path`.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] if the file cannot be created or
/// written.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_rows(file, rows)?;
    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use nepal_atlas_forecast_models::RegressionModel;
    use nepal_atlas_scoring_models::{FocusResult, RiskLevel};

    use super::*;

    fn to_string<T: Serialize>(rows: &[T]) -> String {
        let mut buf = Vec::new();
        write_rows(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn point(year: f64, predicted: f64, margin: f64) -> ForecastPoint {
        ForecastPoint {
            year,
            predicted,
            lower: predicted - margin,
            upper: predicted + margin,
        }
    }

    #[test]
    fn forecast_export_marks_future_years_unobserved() {
        let forecast = Forecast {
            historical: vec![point(2021.0, 0.6012, 0.01)],
            future: vec![point(2022.0, 0.61, 0.011)],
            model: RegressionModel {
                coefficients: vec![0.1, 0.2, 0.3],
                r_squared: 0.99,
                standard_error: 0.005,
            },
        };
        let series = Series {
            years: vec![2021.0],
            values: vec![0.6],
        };

        let csv = to_string(&forecast_rows(&forecast, &series));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "year,actual,predicted,lower_CI,upper_CI,model");
        assert_eq!(
            lines[1],
            "2021,0.6000,0.6012,0.5912,0.6112,Polynomial Degree 2"
        );
        assert_eq!(lines[2], "2022,N/A,0.6100,0.5990,0.6210,Polynomial Degree 2");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn risk_export_joins_factors() {
        let risk = DistrictRisk {
            district: "Morang".to_string(),
            risk_level: RiskLevel::Medium,
            risk_score: 55,
            factors: vec![
                "High population density".to_string(),
                "High air pollution".to_string(),
            ],
        };

        let csv = to_string(&[RiskRow::from(&risk)]);
        assert_eq!(
            csv,
            "district,riskLevel,riskScore,factors\n\
             Morang,medium,55,High population density; High air pollution\n"
        );
    }

    #[test]
    fn focus_results_export_directly() {
        let results = vec![FocusResult {
            district: "Kathmandu".to_string(),
            score: 99,
            reason: "High nightlight (62.3), density 5057/km², urban 74.0%".to_string(),
        }];

        let csv = to_string(&results);
        assert!(csv.starts_with("district,score,reason\n"));
        assert!(csv.contains(
            "Kathmandu,99,\"High nightlight (62.3), density 5057/km², urban 74.0%\""
        ));
    }
}
