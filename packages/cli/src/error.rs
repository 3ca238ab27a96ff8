use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The config file exists but is not valid TOML for [`crate::config::AtlasConfig`].
    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading a series or writing an export failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    District(#[from] nepal_atlas_district::DistrictError),

    #[error(transparent)]
    Forecast(#[from] nepal_atlas_forecast::ForecastError),

    /// No table joins cover the requested district.
    #[error("No complete profile for district '{0}'")]
    UnknownDistrict(String),

    /// The series file held no rows.
    #[error("Series {0} has no observations")]
    EmptySeries(PathBuf),
}
