//! Loads attribute tables from a data directory.
//!
//! Each table is a JSON array of camelCase records in its own file. A
//! missing file is treated as an empty table so that joins against it fail
//! closed; a file that exists but does not parse is an error.

use std::io::ErrorKind;
use std::path::Path;

use nepal_atlas_district_models::DistrictTables;
use serde::de::DeserializeOwned;

use crate::DistrictError;

/// The files making up a district data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFile {
    Population,
    LandCover,
    UrbanGrowth,
    AirPollution,
    Nightlights,
    Elevation,
    Temperature,
    LifeExpectancy,
}

impl TableFile {
    pub const ALL: &'static [Self] = &[
        Self::Population,
        Self::LandCover,
        Self::UrbanGrowth,
        Self::AirPollution,
        Self::Nightlights,
        Self::Elevation,
        Self::Temperature,
        Self::LifeExpectancy,
    ];

    /// File name inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Population => "population.json",
            Self::LandCover => "land_cover.json",
            Self::UrbanGrowth => "urban_growth.json",
            Self::AirPollution => "air_pollution.json",
            Self::Nightlights => "nightlights.json",
            Self::Elevation => "elevation.json",
            Self::Temperature => "temperature.json",
            Self::LifeExpectancy => "life_expectancy.json",
        }
    }
}

/// Loads every table from `dir`.
///
/// # Errors
///
/// Returns [`DistrictError`] if a table file exists but cannot be read or
/// does not contain a JSON array of the expected records.
pub fn load_tables(dir: &Path) -> Result<DistrictTables, DistrictError> {
    let tables = DistrictTables {
        population: read_table(dir, TableFile::Population)?,
        land_cover: read_table(dir, TableFile::LandCover)?,
        urban_growth: read_table(dir, TableFile::UrbanGrowth)?,
        air_pollution: read_table(dir, TableFile::AirPollution)?,
        nightlights: read_table(dir, TableFile::Nightlights)?,
        elevation: read_table(dir, TableFile::Elevation)?,
        temperature: read_table(dir, TableFile::Temperature)?,
        life_expectancy: read_table(dir, TableFile::LifeExpectancy)?,
    };

    log::info!(
        "Loaded district tables from {} ({} districts with population data)",
        dir.display(),
        tables.population.len()
    );

    Ok(tables)
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: TableFile) -> Result<Vec<T>, DistrictError> {
    let path = dir.join(file.file_name());

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "{} not found; joins against it will exclude every district",
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(source) => return Err(DistrictError::Io { path, source }),
    };

    let rows: Vec<T> = match serde_json::from_str(&contents) {
        Ok(rows) => rows,
        Err(source) => return Err(DistrictError::Json { path, source }),
    };

    log::debug!("Loaded {} rows from {}", rows.len(), path.display());

    Ok(rows)
}
