#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command line front end for the Nepal district atlas.
//!
//! Fits and projects yearly series, ranks districts by focus area and
//! additive risk, and prints joined district profiles. District tables are
//! read from a directory of JSON files; see [`nepal_atlas_district::TableFile`].

mod config;
mod error;
mod export;
mod series;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use nepal_atlas_district::{district_profile, load_tables};
use nepal_atlas_district_models::DistrictTables;
use nepal_atlas_forecast::{calculate_cagr, forecast};
use nepal_atlas_scoring::{focus_results, rank_district_risks};
use nepal_atlas_scoring_models::FocusArea;

use crate::config::AtlasConfig;
use crate::error::CliError;
use crate::export::RiskRow;
use crate::series::{Series, future_years};

#[derive(Parser)]
#[command(
    name = "nepal_atlas",
    about = "Trend forecasts and composite district scores for Nepal"
)]
struct Cli {
    /// Path to a `nepal_atlas.toml` config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a polynomial trend to a yearly series and project it forward
    Forecast {
        /// CSV file with `year,value` columns
        #[arg(long)]
        series: PathBuf,

        /// Polynomial degree (defaults to the config value, then 2)
        #[arg(long)]
        degree: Option<usize>,

        /// Number of years to project past the last observation
        #[arg(long, conflicts_with = "until")]
        horizon: Option<u32>,

        /// Last year to project, inclusive
        #[arg(long)]
        until: Option<i32>,

        /// Write historical and projected points to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Rank districts for a focus area
    Focus {
        /// healthcare, airQuality, deforestation, urbanGrowth or agricultural
        area: FocusArea,

        /// Directory holding the district JSON tables
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Write the ranking to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Rank every district by additive risk score
    Risk {
        /// Directory holding the district JSON tables
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Write the ranking to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the joined profile of one district as JSON
    Profile {
        /// District name as it appears in the tables
        district: String,

        /// Directory holding the district JSON tables
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = AtlasConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Forecast {
            series,
            degree,
            horizon,
            until,
            output,
        } => {
            let degree = degree.unwrap_or(config.forecast.degree);
            let horizon = horizon.unwrap_or(config.forecast.horizon);
            run_forecast(&series, degree, horizon, until, output.as_deref())?;
        }
        Commands::Focus {
            area,
            data_dir,
            output,
        } => {
            let tables = load(&config, data_dir)?;
            run_focus(area, &tables, output.as_deref())?;
        }
        Commands::Risk { data_dir, output } => {
            let tables = load(&config, data_dir)?;
            run_risk(&tables, output.as_deref())?;
        }
        Commands::Profile { district, data_dir } => {
            let tables = load(&config, data_dir)?;
            run_profile(&tables, district)?;
        }
    }

    Ok(())
}

fn load(config: &AtlasConfig, flag: Option<PathBuf>) -> Result<DistrictTables, CliError> {
    let dir = config.data_dir(flag);
    Ok(load_tables(&dir)?)
}

fn run_forecast(
    path: &Path,
    degree: usize,
    horizon: u32,
    until: Option<i32>,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let series = Series::from_path(path)?;
    let future = future_years(series.last_year(), horizon, until);
    let result = forecast(&series.years, &series.values, &future, degree)?;

    log::info!(
        "Fitted degree {degree} to {} points, projecting {} years",
        series.years.len(),
        future.len()
    );

    let coefficients: Vec<String> = result
        .model
        .coefficients
        .iter()
        .map(|c| format!("{c:.6}"))
        .collect();
    println!("Coefficients:   [{}]", coefficients.join(", "));
    println!("R²:             {:.4}", result.model.r_squared);
    println!("Standard error: {:.4}", result.model.standard_error);

    if let Some(((first_year, first), (last_year, last))) = series.endpoints() {
        match calculate_cagr(first, last, last_year - first_year) {
            Ok(rate) => println!("CAGR:           {:.2}%", rate * 100.0),
            Err(e) => log::warn!("Skipping CAGR: {e}"),
        }
    }

    println!();
    println!(
        "{:<8} {:>12} {:>12} {:>12} {:>12}",
        "YEAR", "ACTUAL", "PREDICTED", "LOWER", "UPPER"
    );
    for point in result.historical.iter().chain(&result.future) {
        let actual = series
            .value_at(point.year)
            .map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));
        println!(
            "{:<8} {:>12} {:>12.4} {:>12.4} {:>12.4}",
            point.year, actual, point.predicted, point.lower, point.upper
        );
    }

    if let Some(output) = output {
        export::write_csv(output, &export::forecast_rows(&result, &series))?;
    }

    Ok(())
}

fn run_focus(
    area: FocusArea,
    tables: &DistrictTables,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let results = focus_results(area, tables);

    log::info!("{}: {} districts", area.label(), results.len());

    println!("{}", area.label());
    println!();
    println!("{:<4} {:<20} {:>6} REASON", "#", "DISTRICT", "SCORE");
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:>6} {}",
            rank + 1,
            result.district,
            result.score,
            result.reason
        );
    }

    if let Some(output) = output {
        export::write_csv(output, &results)?;
    }

    Ok(())
}

fn run_risk(tables: &DistrictTables, output: Option<&Path>) -> Result<(), CliError> {
    let risks = rank_district_risks(tables);

    log::info!("Assessed risk for {} districts", risks.len());

    println!(
        "{:<4} {:<20} {:<8} {:>6} FACTORS",
        "#", "DISTRICT", "LEVEL", "SCORE"
    );
    for (rank, risk) in risks.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:<8} {:>6} {}",
            rank + 1,
            risk.district,
            risk.risk_level,
            risk.risk_score,
            risk.factors.join(", ")
        );
    }

    if let Some(output) = output {
        let rows: Vec<RiskRow> = risks.iter().map(RiskRow::from).collect();
        export::write_csv(output, &rows)?;
    }

    Ok(())
}

fn run_profile(tables: &DistrictTables, district: String) -> Result<(), CliError> {
    let Some(profile) = district_profile(tables, &district) else {
        return Err(CliError::UnknownDistrict(district));
    };

    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}
