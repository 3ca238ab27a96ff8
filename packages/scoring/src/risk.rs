//! Additive district risk scoring.
//!
//! Independent of the focus areas: five fixed threshold checks each add a
//! fixed number of points, and the total is bucketed into low, medium or
//! high risk.

use nepal_atlas_district::DistrictIndex;
use nepal_atlas_district_models::{
    AirPollutionRecord, DistrictTables, LandCoverRecord, LifeExpectancyRecord, PopulationRecord,
    TemperatureRecord,
};
use nepal_atlas_scoring_models::{DistrictRisk, RiskLevel};

/// Factor label used when no rule fires.
pub const NO_RISK_FACTORS: &str = "No major risk factors";

/// The joined rows a risk assessment reads.
struct RiskInputs<'a> {
    population: &'a PopulationRecord,
    air: &'a AirPollutionRecord,
    temperature: &'a TemperatureRecord,
    land: &'a LandCoverRecord,
    life: &'a LifeExpectancyRecord,
}

struct RiskRule {
    points: u32,
    label: &'static str,
    triggered: fn(&RiskInputs<'_>) -> bool,
}

const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        points: 30,
        label: "High population density",
        triggered: |i| i.population.density_per_sq_km > 300.0,
    },
    RiskRule {
        points: 25,
        label: "High air pollution",
        triggered: |i| i.air.pm25 > 40.0,
    },
    RiskRule {
        points: 20,
        label: "High urban heat island",
        triggered: |i| i.temperature.uhi_index > 10.0,
    },
    RiskRule {
        points: 15,
        label: "Low forest cover",
        triggered: |i| i.land.forest_pct < 20.0,
    },
    RiskRule {
        points: 10,
        label: "Lower life expectancy",
        triggered: |i| i.life.life_expectancy < 70.0,
    },
];

fn join<'a>(index: &DistrictIndex<'a>, district: &str) -> Option<RiskInputs<'a>> {
    Some(RiskInputs {
        population: index.population.get(district)?,
        air: index.air_pollution.get(district)?,
        temperature: index.temperature.get(district)?,
        land: index.land_cover.get(district)?,
        life: index.life_expectancy.get(district)?,
    })
}

fn assess(index: &DistrictIndex<'_>, district: &str) -> Option<DistrictRisk> {
    let inputs = join(index, district)?;

    let mut risk_score = 0;
    let mut factors = Vec::new();
    for rule in RISK_RULES.iter().filter(|r| (r.triggered)(&inputs)) {
        risk_score += rule.points;
        factors.push(rule.label.to_string());
    }

    if factors.is_empty() {
        factors.push(NO_RISK_FACTORS.to_string());
    }

    Some(DistrictRisk {
        district: district.to_string(),
        risk_level: RiskLevel::from_score(risk_score),
        risk_score,
        factors,
    })
}

/// Assesses a single district.
///
/// Returns `None` unless the population, air pollution, temperature, land
/// cover and life expectancy tables all cover `district`.
#[must_use]
pub fn district_risk(tables: &DistrictTables, district: &str) -> Option<DistrictRisk> {
    assess(&DistrictIndex::new(tables), district)
}

/// Assesses every district in the population table, highest risk first.
///
/// Districts with equal scores keep population table order.
#[must_use]
pub fn rank_district_risks(tables: &DistrictTables) -> Vec<DistrictRisk> {
    let index = DistrictIndex::new(tables);

    let mut risks: Vec<DistrictRisk> = index
        .population
        .rows()
        .iter()
        .filter_map(|pop| assess(&index, &pop.district))
        .collect();

    risks.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

    log::debug!(
        "Assessed risk for {} of {} districts",
        risks.len(),
        index.population.len()
    );

    risks
}
