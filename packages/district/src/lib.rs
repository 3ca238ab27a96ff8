#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District attribute tables: loading, keyed lookups and joins.
//!
//! The tables are plain JSON arrays, one file per attribute table, living in
//! a single data directory. Every join performed through [`DistrictIndex`]
//! fails closed: a district missing from any required table produces no
//! joined value at all.

pub mod index;
pub mod load;
pub mod profile;

use std::path::PathBuf;

pub use index::{DistrictIndex, Table};
pub use load::{TableFile, load_tables};
pub use profile::district_profile;

use nepal_atlas_district_models::{DistrictKeyed as _, DistrictTables};
use thiserror::Error;

/// Errors that can occur while loading district tables.
#[derive(Debug, Error)]
pub enum DistrictError {
    /// Reading a table file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A table file did not contain the expected JSON array.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// Returns the sorted, de-duplicated set of district names across all tables.
#[must_use]
pub fn district_names(tables: &DistrictTables) -> Vec<String> {
    let mut names = std::collections::BTreeSet::new();

    names.extend(tables.population.iter().map(|r| r.district()));
    names.extend(tables.land_cover.iter().map(|r| r.district()));
    names.extend(tables.urban_growth.iter().map(|r| r.district()));
    names.extend(tables.air_pollution.iter().map(|r| r.district()));
    names.extend(tables.nightlights.iter().map(|r| r.district()));
    names.extend(tables.elevation.iter().map(|r| r.district()));
    names.extend(tables.temperature.iter().map(|r| r.district()));
    names.extend(tables.life_expectancy.iter().map(|r| r.district()));

    names.into_iter().map(str::to_string).collect()
}
