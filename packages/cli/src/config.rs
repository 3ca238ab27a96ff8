//! Optional TOML configuration.
//!
//! Looked up from `--config`, then the `NEPAL_ATLAS_CONFIG` environment
//! variable, then `nepal_atlas.toml` in the working directory. Command line
//! flags override anything set here.

use std::path::{Path, PathBuf};

use nepal_atlas_forecast::DEFAULT_DEGREE;
use serde::Deserialize;

use crate::error::CliError;

const DEFAULT_CONFIG_FILE: &str = "nepal_atlas.toml";
const DEFAULT_DATA_DIR: &str = "data";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AtlasConfig {
    /// Directory holding the district table JSON files.
    pub data_dir: Option<PathBuf>,
    pub forecast: ForecastConfig,
}

/// Defaults for the `forecast` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub degree: usize,
    /// Number of years to project past the last observation.
    pub horizon: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            horizon: 9,
        }
    }
}

impl AtlasConfig {
    /// Loads the config, falling back to defaults when no file is found.
    ///
    /// An explicitly requested file (flag or environment variable) must
    /// exist; the default file name is optional.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if a requested file cannot be read or any file
    /// fails to parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let requested = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("NEPAL_ATLAS_CONFIG").ok().map(PathBuf::from));

        let path = match requested {
            Some(path) => path,
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    log::debug!("No {DEFAULT_CONFIG_FILE} found; using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(CliError::Io { path, source }),
        };

        let config = Self::parse(&contents).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        })?;

        log::info!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Parses config TOML.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if `contents` does not match the schema.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Data directory: the flag if given, else the config value, else `data`.
    #[must_use]
    pub fn data_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}
