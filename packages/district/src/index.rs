//! Keyed views over district tables.
//!
//! Lookups are by exact, case-sensitive district name. When a table carries
//! the same district twice, the first row wins.

use std::collections::BTreeMap;

use nepal_atlas_district_models::{
    AirPollutionRecord, DistrictKeyed, DistrictTables, ElevationRecord, LandCoverRecord,
    LifeExpectancyRecord, NightlightRecord, PopulationRecord, TemperatureRecord,
    UrbanGrowthRecord,
};

/// A borrowed table with a district-name index.
#[derive(Debug)]
pub struct Table<'a, T> {
    rows: &'a [T],
    by_district: BTreeMap<&'a str, &'a T>,
}

impl<'a, T: DistrictKeyed> Table<'a, T> {
    /// Indexes `rows` by district name.
    #[must_use]
    pub fn new(rows: &'a [T]) -> Self {
        let mut by_district = BTreeMap::new();
        for row in rows {
            by_district.entry(row.district()).or_insert(row);
        }

        if by_district.len() != rows.len() {
            log::debug!(
                "Table has {} duplicate district rows; keeping first occurrence",
                rows.len() - by_district.len()
            );
        }

        Self { rows, by_district }
    }

    /// Looks up the row for `district`.
    #[must_use]
    pub fn get(&self, district: &str) -> Option<&'a T> {
        self.by_district.get(district).copied()
    }

    /// Rows in their original order.
    #[must_use]
    pub const fn rows(&self) -> &'a [T] {
        self.rows
    }

    /// Number of distinct districts in this table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_district.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_district.is_empty()
    }
}

/// Name-indexed view over every attribute table.
///
/// Built once per scoring call; all joins go through it.
#[derive(Debug)]
pub struct DistrictIndex<'a> {
    pub population: Table<'a, PopulationRecord>,
    pub land_cover: Table<'a, LandCoverRecord>,
    pub urban_growth: Table<'a, UrbanGrowthRecord>,
    pub air_pollution: Table<'a, AirPollutionRecord>,
    pub nightlights: Table<'a, NightlightRecord>,
    pub elevation: Table<'a, ElevationRecord>,
    pub temperature: Table<'a, TemperatureRecord>,
    pub life_expectancy: Table<'a, LifeExpectancyRecord>,
}

impl<'a> DistrictIndex<'a> {
    /// Builds the index over borrowed tables.
    #[must_use]
    pub fn new(tables: &'a DistrictTables) -> Self {
        Self {
            population: Table::new(&tables.population),
            land_cover: Table::new(&tables.land_cover),
            urban_growth: Table::new(&tables.urban_growth),
            air_pollution: Table::new(&tables.air_pollution),
            nightlights: Table::new(&tables.nightlights),
            elevation: Table::new(&tables.elevation),
            temperature: Table::new(&tables.temperature),
            life_expectancy: Table::new(&tables.life_expectancy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urban(district: &str, pct: f64) -> UrbanGrowthRecord {
        UrbanGrowthRecord {
            district: district.to_string(),
            urban_extent_pct: pct,
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let rows = vec![urban("Kathmandu", 89.1)];
        let table = Table::new(&rows);

        assert!(table.get("Kathmandu").is_some());
        assert!(table.get("kathmandu").is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let rows = vec![urban("Lalitpur", 40.0), urban("Lalitpur", 99.0)];
        let table = Table::new(&rows);

        assert_eq!(table.len(), 1);
        assert!((table.get("Lalitpur").unwrap().urban_extent_pct - 40.0).abs() < f64::EPSILON);
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn index_covers_every_table() {
        let tables = DistrictTables {
            urban_growth: vec![urban("Chitwan", 12.0)],
            ..DistrictTables::default()
        };
        let index = DistrictIndex::new(&tables);

        assert!(index.urban_growth.get("Chitwan").is_some());
        assert!(index.population.is_empty());
        assert!(index.population.get("Chitwan").is_none());
    }
}
