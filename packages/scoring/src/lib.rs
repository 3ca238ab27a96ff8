#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Composite district scoring.
//!
//! Two independent rule sets read the same district tables:
//!
//! * [`focus`] ranks districts for five planning themes using weighted,
//!   normalised sub-scores (one [`focus::FocusRule`] per
//!   [`FocusArea`](nepal_atlas_scoring_models::FocusArea)).
//! * [`risk`] adds fixed bonuses for threshold crossings and buckets the
//!   total into a [`RiskLevel`](nepal_atlas_scoring_models::RiskLevel).
//!
//! Both join tables by exact district name and drop any district that a
//! required table does not cover. Nothing here mutates its inputs.

pub mod focus;
pub mod risk;

pub use focus::{FOCUS_RULES, FocusRule, focus_results};
pub use risk::{district_risk, rank_district_risks};

/// Rounds half up, matching how dashboard scores have always been shown.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn round_score(score: f64) -> i64 {
    (score + 0.5).floor() as i64
}

/// Formats `value` with `decimals` fraction digits.
///
/// Exact halves round away from zero, as the dashboard's `toFixed` does;
/// everything else rounds to the nearest representable decimal.
#[allow(clippy::float_cmp)]
pub(crate) fn fixed(value: f64, decimals: u8) -> String {
    let precision = usize::from(decimals);
    let scale = 10_f64.powi(i32::from(decimals));
    let scaled = value * scale;
    let exact = value.mul_add(scale, -scaled) == 0.0;
    let tie = exact && scaled.abs().fract() == 0.5;

    if tie {
        format!("{:.precision$}", scaled.round() / scale)
    } else {
        format!("{value:.precision$}")
    }
}

/// Formats an integer with comma thousands separators.
pub(crate) fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small synthetic tables shared by the scoring tests.

    use nepal_atlas_district_models::{
        AirPollutionRecord, DistrictTables, ElevationRecord, LandCoverRecord,
        LifeExpectancyRecord, NightlightRecord, PopulationRecord, TemperatureRecord,
        UrbanGrowthRecord,
    };

    pub fn population(district: &str, population: u64, density: f64) -> PopulationRecord {
        PopulationRecord {
            district: district.to_string(),
            population,
            density_per_sq_km: density,
        }
    }

    pub fn land(district: &str, forest: f64, cropland: f64, water: f64, barren: f64) -> LandCoverRecord {
        LandCoverRecord {
            district: district.to_string(),
            forest_pct: forest,
            cropland_pct: cropland,
            grassland_pct: 5.0,
            urban_pct: 5.0,
            water_pct: water,
            barren_pct: barren,
        }
    }

    pub fn urban(district: &str, pct: f64) -> UrbanGrowthRecord {
        UrbanGrowthRecord {
            district: district.to_string(),
            urban_extent_pct: pct,
        }
    }

    pub fn air(district: &str, pm25: f64) -> AirPollutionRecord {
        AirPollutionRecord {
            district: district.to_string(),
            pm25,
        }
    }

    pub fn night(district: &str, radiance: f64) -> NightlightRecord {
        NightlightRecord {
            district: district.to_string(),
            mean_ntl_radiance: radiance,
        }
    }

    pub fn elevation(district: &str, mean: f64) -> ElevationRecord {
        ElevationRecord {
            district: district.to_string(),
            mean_elevation: mean,
            min_elevation: mean / 2.0,
            max_elevation: mean * 2.0,
        }
    }

    pub fn temperature(district: &str, uhi: f64) -> TemperatureRecord {
        TemperatureRecord {
            district: district.to_string(),
            temp: 25.0,
            lst_day: 30.0,
            lst_night: 30.0 - uhi,
            uhi_index: uhi,
        }
    }

    pub fn life(district: &str, years: f64) -> LifeExpectancyRecord {
        LifeExpectancyRecord {
            district: district.to_string(),
            life_expectancy: years,
        }
    }

    pub fn empty() -> DistrictTables {
        DistrictTables::default()
    }
}
