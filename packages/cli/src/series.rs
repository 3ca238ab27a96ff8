//! Yearly `year,value` series input.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct SeriesRow {
    year: f64,
    value: f64,
}

/// Observed years and values, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub years: Vec<f64>,
    pub values: Vec<f64>,
}

impl Series {
    /// Reads a headed `year,value` CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Csv`] for unreadable or malformed rows and
    /// [`CliError::EmptySeries`] if the file has no data rows.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        let series = Self::from_csv(reader)?;

        if series.years.is_empty() {
            return Err(CliError::EmptySeries(path.to_path_buf()));
        }

        log::info!(
            "Read {} observations from {}",
            series.years.len(),
            path.display()
        );

        Ok(series)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, csv::Error> {
        let mut series = Self::default();
        for row in reader.deserialize() {
            let row: SeriesRow = row?;
            series.years.push(row.year);
            series.values.push(row.value);
        }
        Ok(series)
    }

    /// Latest observed year.
    #[must_use]
    pub fn last_year(&self) -> f64 {
        self.years.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Value observed in `year`, if any.
    #[must_use]
    pub fn value_at(&self, year: f64) -> Option<f64> {
        self.years
            .iter()
            .position(|&y| (y - year).abs() < f64::EPSILON)
            .map(|i| self.values[i])
    }

    /// Earliest and latest observations, used for the growth rate.
    #[must_use]
    pub fn endpoints(&self) -> Option<((f64, f64), (f64, f64))> {
        let first = self
            .years
            .iter()
            .zip(&self.values)
            .min_by(|a, b| a.0.total_cmp(b.0))?;
        let last = self
            .years
            .iter()
            .zip(&self.values)
            .max_by(|a, b| a.0.total_cmp(b.0))?;
        Some(((*first.0, *first.1), (*last.0, *last.1)))
    }
}

/// Whole years following `last_year`.
///
/// `until` is an inclusive end year and takes precedence over `horizon`.
#[must_use]
pub fn future_years(last_year: f64, horizon: u32, until: Option<i32>) -> Vec<f64> {
    let steps = until.map_or(horizon, |until| {
        let gap = (f64::from(until) - last_year).floor();
        if gap <= 0.0 {
            0
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let gap = gap as u32;
            gap
        }
    });

    (1..=steps).map(|step| last_year + f64::from(step)).collect()
}
