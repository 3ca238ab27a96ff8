//! Joined single-district view used by the map info card.

use nepal_atlas_district_models::{DistrictProfile, DistrictTables};

use crate::DistrictIndex;

/// Joins population, land cover, urban growth, air pollution, nightlights
/// and elevation for one district.
///
/// Returns `None` if any of the six tables lacks the district.
#[must_use]
pub fn district_profile(tables: &DistrictTables, district: &str) -> Option<DistrictProfile> {
    let index = DistrictIndex::new(tables);

    let pop = index.population.get(district)?;
    let land = index.land_cover.get(district)?;
    let urban = index.urban_growth.get(district)?;
    let air = index.air_pollution.get(district)?;
    let night = index.nightlights.get(district)?;
    let elev = index.elevation.get(district)?;

    Some(DistrictProfile {
        district: district.to_string(),
        population: pop.population,
        nightlight: night.mean_ntl_radiance,
        forest: land.forest_pct,
        cropland: land.cropland_pct,
        grassland: land.grassland_pct,
        urban: land.urban_pct,
        water: land.water_pct,
        barren: land.barren_pct,
        urban_extent: urban.urban_extent_pct,
        pm25: air.pm25,
        mean_elevation: elev.mean_elevation,
        min_elevation: elev.min_elevation,
        max_elevation: elev.max_elevation,
    })
}

#[cfg(test)]
mod tests {
    use nepal_atlas_district_models::{
        AirPollutionRecord, ElevationRecord, LandCoverRecord, NightlightRecord, PopulationRecord,
        UrbanGrowthRecord,
    };

    use super::*;

    fn tables_for(district: &str) -> DistrictTables {
        let d = district.to_string();
        DistrictTables {
            population: vec![PopulationRecord {
                district: d.clone(),
                population: 547_788,
                density_per_sq_km: 1_362.1,
            }],
            land_cover: vec![LandCoverRecord {
                district: d.clone(),
                forest_pct: 25.0,
                cropland_pct: 45.0,
                grassland_pct: 8.0,
                urban_pct: 12.0,
                water_pct: 4.0,
                barren_pct: 6.0,
            }],
            urban_growth: vec![UrbanGrowthRecord {
                district: d.clone(),
                urban_extent_pct: 18.0,
            }],
            air_pollution: vec![AirPollutionRecord {
                district: d.clone(),
                pm25: 42.0,
            }],
            nightlights: vec![NightlightRecord {
                district: d.clone(),
                mean_ntl_radiance: 23.7,
            }],
            elevation: vec![ElevationRecord {
                district: d,
                mean_elevation: 150.0,
                min_elevation: 110.0,
                max_elevation: 900.0,
            }],
            ..DistrictTables::default()
        }
    }

    #[test]
    fn joins_all_six_tables() {
        let tables = tables_for("Banke");
        let profile = district_profile(&tables, "Banke").unwrap();

        assert_eq!(profile.population, 547_788);
        assert!((profile.nightlight - 23.7).abs() < f64::EPSILON);
        assert!((profile.urban_extent - 18.0).abs() < f64::EPSILON);
        assert!((profile.max_elevation - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_any_table_yields_none() {
        let mut tables = tables_for("Banke");
        tables.nightlights.clear();
        assert!(district_profile(&tables, "Banke").is_none());

        let tables = tables_for("Banke");
        assert!(district_profile(&tables, "Bardiya").is_none());
    }
}
