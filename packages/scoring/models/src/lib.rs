#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Composite district score result types.
//!
//! Results are recomputed on every request and never cached, so they own
//! their strings rather than borrowing from the source tables.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A planning theme that districts are ranked against.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FocusArea {
    /// Populous, rural, high-altitude districts that are hard to serve.
    Healthcare,
    /// Urbanised districts with PM2.5 above 35 µg/m³.
    AirQuality,
    /// Low forest cover with expanding cropland.
    Deforestation,
    /// Bright, dense districts with little free land.
    UrbanGrowth,
    /// Low-lying cropland with water access.
    Agricultural,
}

impl FocusArea {
    /// Human-readable title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthcare => "Healthcare need",
            Self::AirQuality => "Air quality concern",
            Self::Deforestation => "Deforestation risk",
            Self::UrbanGrowth => "Urban growth pressure",
            Self::Agricultural => "Agricultural potential",
        }
    }
}

/// One district's score for a focus area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusResult {
    pub district: String,
    /// Weighted score rounded to the nearest integer.
    pub score: i64,
    /// Explanation quoting the raw attribute values.
    pub reason: String,
}

/// Risk bucket for a district risk score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets an additive risk score: 60 and above is high, 30 and above
    /// is medium.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= 60 {
            Self::High
        } else if score >= 30 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Additive risk assessment for one district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRisk {
    pub district: String,
    pub risk_level: RiskLevel,
    /// Sum of the bonuses of every triggered factor, 0 to 100.
    pub risk_score: u32,
    /// Labels of the triggered factors, in rule order.
    pub factors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn focus_area_string_forms_match_serde() {
        for area in FocusArea::iter() {
            let json = serde_json::to_string(&area).unwrap();
            assert_eq!(json, format!("\"{area}\""));
            assert_eq!(FocusArea::from_str(area.as_ref()).unwrap(), area);
        }
        assert_eq!(FocusArea::AirQuality.to_string(), "airQuality");
    }

    #[test]
    fn risk_buckets_at_thirty_and_sixty() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(59), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }
}
