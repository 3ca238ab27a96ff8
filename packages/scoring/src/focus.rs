//! Focus area rankings.
//!
//! Every focus area follows the same pipeline: walk a driving table, join
//! the other tables it needs, compute a weighted score from normalised
//! sub-scores, keep districts above the area's threshold, round, sort
//! descending and truncate. Only the formula, threshold and limit differ,
//! so each area is one [`FocusRule`] in [`FOCUS_RULES`].

// Scores must match the dashboard's unfused arithmetic bit for bit.
#![allow(clippy::suboptimal_flops)]

use nepal_atlas_district::DistrictIndex;
use nepal_atlas_district_models::DistrictTables;
use nepal_atlas_scoring_models::{FocusArea, FocusResult};

use crate::{fixed, round_score, with_thousands};

/// Unrounded score for one district, before threshold and ranking.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub district: String,
    pub score: f64,
    pub reason: String,
}

/// Formula, inclusion threshold and result limit for one focus area.
#[derive(Debug, Clone, Copy)]
pub struct FocusRule {
    pub area: FocusArea,
    /// Districts must score strictly above this to be included.
    pub threshold: Option<f64>,
    /// Maximum number of results kept after sorting.
    pub limit: Option<usize>,
    /// Produces joined, pre-filtered candidates from the driving table.
    pub candidates: fn(&DistrictIndex<'_>) -> Vec<Candidate>,
}

/// One rule per [`FocusArea`], in declaration order.
pub const FOCUS_RULES: &[FocusRule] = &[
    FocusRule {
        area: FocusArea::Healthcare,
        threshold: Some(50.0),
        limit: Some(15),
        candidates: healthcare_need,
    },
    FocusRule {
        area: FocusArea::AirQuality,
        threshold: None,
        limit: None,
        candidates: air_quality_concern,
    },
    FocusRule {
        area: FocusArea::Deforestation,
        threshold: None,
        limit: None,
        candidates: deforestation_risk,
    },
    FocusRule {
        area: FocusArea::UrbanGrowth,
        threshold: Some(40.0),
        limit: Some(15),
        candidates: urban_growth_pressure,
    },
    FocusRule {
        area: FocusArea::Agricultural,
        threshold: Some(40.0),
        limit: Some(15),
        candidates: agricultural_potential,
    },
];

impl FocusRule {
    /// Returns the rule for `area`.
    #[must_use]
    pub fn for_area(area: FocusArea) -> &'static Self {
        // FOCUS_RULES lists the variants in declaration order.
        &FOCUS_RULES[area as usize]
    }

    /// Runs the rule against an index and returns ranked results.
    #[must_use]
    pub fn apply(&self, index: &DistrictIndex<'_>) -> Vec<FocusResult> {
        let candidates = (self.candidates)(index);
        let considered = candidates.len();

        let mut results: Vec<FocusResult> = candidates
            .into_iter()
            .filter(|c| self.threshold.is_none_or(|t| c.score > t))
            .map(|c| FocusResult {
                district: c.district,
                score: round_score(c.score),
                reason: c.reason,
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        log::debug!(
            "{}: {considered} joined candidates, {} ranked",
            self.area,
            results.len()
        );

        results
    }
}

/// Ranks districts for one focus area.
#[must_use]
pub fn focus_results(area: FocusArea, tables: &DistrictTables) -> Vec<FocusResult> {
    let index = DistrictIndex::new(tables);
    FocusRule::for_area(area).apply(&index)
}

/// High population, low urban extent and high elevation.
fn healthcare_need(index: &DistrictIndex<'_>) -> Vec<Candidate> {
    index
        .population
        .rows()
        .iter()
        .filter_map(|pop| {
            let urban = index.urban_growth.get(&pop.district)?;
            let elev = index.elevation.get(&pop.district)?;

            #[allow(clippy::cast_precision_loss)]
            let pop_score = (pop.population as f64 / 2_000_000.0 * 100.0).min(100.0);
            let urban_score = 100.0 - urban.urban_extent_pct * 2.5;
            let elev_score = (elev.mean_elevation / 4000.0 * 100.0).min(100.0);

            Some(Candidate {
                district: pop.district.clone(),
                score: pop_score * 0.4 + urban_score * 0.3 + elev_score * 0.3,
                reason: format!(
                    "High population ({}), low urbanization ({}%), difficult terrain ({}m)",
                    with_thousands(pop.population),
                    fixed(urban.urban_extent_pct, 1),
                    elev.mean_elevation
                ),
            })
        })
        .collect()
}

/// PM2.5 above 35 µg/m³, weighted with urban extent.
fn air_quality_concern(index: &DistrictIndex<'_>) -> Vec<Candidate> {
    index
        .air_pollution
        .rows()
        .iter()
        .filter_map(|air| {
            let urban = index.urban_growth.get(&air.district)?;
            if air.pm25 <= 35.0 {
                return None;
            }

            let pm25_score = (air.pm25 / 60.0 * 100.0).min(100.0);
            let urban_score = urban.urban_extent_pct * 2.5;

            Some(Candidate {
                district: air.district.clone(),
                score: pm25_score * 0.6 + urban_score * 0.4,
                reason: format!(
                    "High PM2.5 ({} µg/m³), urban extent {}%",
                    fixed(air.pm25, 1),
                    fixed(urban.urban_extent_pct, 1)
                ),
            })
        })
        .collect()
}

/// Forest below 30% while cropland exceeds 40%.
fn deforestation_risk(index: &DistrictIndex<'_>) -> Vec<Candidate> {
    index
        .land_cover
        .rows()
        .iter()
        .filter(|land| land.forest_pct < 30.0 && land.cropland_pct > 40.0)
        .map(|land| {
            let forest_score = 100.0 - land.forest_pct / 30.0 * 100.0;
            let crop_score = (land.cropland_pct - 40.0) / 20.0 * 100.0;

            Candidate {
                district: land.district.clone(),
                score: forest_score * 0.6 + crop_score * 0.4,
                reason: format!(
                    "Low forest ({}%), high cropland ({}%)",
                    fixed(land.forest_pct, 1),
                    fixed(land.cropland_pct, 1)
                ),
            }
        })
        .collect()
}

/// Night-time brightness, density and scarce free land.
fn urban_growth_pressure(index: &DistrictIndex<'_>) -> Vec<Candidate> {
    index
        .nightlights
        .rows()
        .iter()
        .filter_map(|night| {
            let pop = index.population.get(&night.district)?;
            let urban = index.urban_growth.get(&night.district)?;
            let land = index.land_cover.get(&night.district)?;

            let night_score = (night.mean_ntl_radiance / 40.0 * 100.0).min(100.0);
            let density_score = (pop.density_per_sq_km / 5000.0 * 100.0).min(100.0);
            let land_avail_score = 100.0 - (land.barren_pct + land.water_pct) * 2.0;

            Some(Candidate {
                district: night.district.clone(),
                score: night_score * 0.35 + density_score * 0.35 + land_avail_score * 0.3,
                reason: format!(
                    "High nightlight ({}), density {}/km², urban {}%",
                    fixed(night.mean_ntl_radiance, 1),
                    fixed(pop.density_per_sq_km, 0),
                    fixed(urban.urban_extent_pct, 1)
                ),
            })
        })
        .collect()
}

/// Cropland below 1500 m with some surface water.
fn agricultural_potential(index: &DistrictIndex<'_>) -> Vec<Candidate> {
    index
        .land_cover
        .rows()
        .iter()
        .filter_map(|land| {
            let elev = index.elevation.get(&land.district)?;
            if elev.mean_elevation >= 1500.0 {
                return None;
            }

            let crop_score = land.cropland_pct / 60.0 * 100.0;
            let elev_score = 100.0 - elev.mean_elevation / 1500.0 * 100.0;
            let water_score = (land.water_pct * 20.0).min(100.0);

            Some(Candidate {
                district: land.district.clone(),
                score: crop_score * 0.5 + elev_score * 0.3 + water_score * 0.2,
                reason: format!(
                    "High cropland ({}%), low elevation ({}m), water {}%",
                    fixed(land.cropland_pct, 1),
                    elev.mean_elevation,
                    fixed(land.water_pct, 1)
                ),
            })
        })
        .collect()
}
