#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District attribute record types.
//!
//! Each table is an independently sourced list of per-district values keyed
//! by district name. Names are case-sensitive and must match exactly across
//! tables for a join to succeed.

use serde::{Deserialize, Serialize};

/// Common accessor for the join key of every table row.
pub trait DistrictKeyed {
    /// District name this row belongs to.
    fn district(&self) -> &str;
}

macro_rules! impl_keyed {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl DistrictKeyed for $ty {
                fn district(&self) -> &str {
                    &self.district
                }
            }
        )+
    };
}

/// Modelled population for a district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationRecord {
    /// District name.
    pub district: String,
    /// Total population.
    pub population: u64,
    /// Residents per square kilometre.
    pub density_per_sq_km: f64,
}

/// Land cover shares, in percent of district area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandCoverRecord {
    /// District name.
    pub district: String,
    pub forest_pct: f64,
    pub cropland_pct: f64,
    pub grassland_pct: f64,
    pub urban_pct: f64,
    pub water_pct: f64,
    pub barren_pct: f64,
}

/// Built-up urban extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrbanGrowthRecord {
    /// District name.
    pub district: String,
    /// Urban extent as a percentage of district area.
    pub urban_extent_pct: f64,
}

/// Annual mean fine particulate concentration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirPollutionRecord {
    /// District name.
    pub district: String,
    /// PM2.5 in µg/m³.
    pub pm25: f64,
}

/// Night-time light radiance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NightlightRecord {
    /// District name.
    pub district: String,
    /// Mean radiance in nW/cm²/sr.
    #[serde(rename = "meanNTLRadiance")]
    pub mean_ntl_radiance: f64,
}

/// Terrain elevation summary in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationRecord {
    /// District name.
    pub district: String,
    pub mean_elevation: f64,
    pub min_elevation: f64,
    pub max_elevation: f64,
}

/// Air and land surface temperatures in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureRecord {
    /// District name.
    pub district: String,
    pub temp: f64,
    pub lst_day: f64,
    pub lst_night: f64,
    /// Urban heat island index (day/night land surface spread).
    pub uhi_index: f64,
}

/// Life expectancy at birth, in years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeExpectancyRecord {
    /// District name.
    pub district: String,
    pub life_expectancy: f64,
}

impl_keyed!(
    PopulationRecord,
    LandCoverRecord,
    UrbanGrowthRecord,
    AirPollutionRecord,
    NightlightRecord,
    ElevationRecord,
    TemperatureRecord,
    LifeExpectancyRecord,
);

/// Every attribute table the analytics layer reads.
///
/// Tables are owned independently and may cover different sets of
/// districts. Consumers only borrow them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistrictTables {
    pub population: Vec<PopulationRecord>,
    pub land_cover: Vec<LandCoverRecord>,
    pub urban_growth: Vec<UrbanGrowthRecord>,
    pub air_pollution: Vec<AirPollutionRecord>,
    pub nightlights: Vec<NightlightRecord>,
    pub elevation: Vec<ElevationRecord>,
    pub temperature: Vec<TemperatureRecord>,
    pub life_expectancy: Vec<LifeExpectancyRecord>,
}

/// One district joined across the six map-facing tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictProfile {
    pub district: String,
    pub population: u64,
    pub nightlight: f64,
    pub forest: f64,
    pub cropland: f64,
    pub grassland: f64,
    pub urban: f64,
    pub water: f64,
    pub barren: f64,
    pub urban_extent: f64,
    pub pm25: f64,
    pub mean_elevation: f64,
    pub min_elevation: f64,
    pub max_elevation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_dashboard_field_names() {
        let json = r#"{ "district": "Bhaktapur", "meanNTLRadiance": 45.84 }"#;
        let record: NightlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.district(), "Bhaktapur");
        assert!((record.mean_ntl_radiance - 45.84).abs() < f64::EPSILON);

        let json = r#"{ "district": "Jhapa", "population": 780640, "densityPerSqKm": 1094.6 }"#;
        let record: PopulationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.population, 780_640);
    }

    #[test]
    fn missing_tables_default_to_empty() {
        let json = r#"{ "airPollution": [{ "district": "Morang", "pm25": 54.4 }] }"#;
        let tables: DistrictTables = serde_json::from_str(json).unwrap();
        assert_eq!(tables.air_pollution.len(), 1);
        assert!(tables.population.is_empty());
        assert!(tables.life_expectancy.is_empty());
    }
}
