use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{input_ops, CampusRouteConfig, CampusRouteError, CampusRouteService};
use crate::model::schedule::DayOfWeek;

/// command line tool for planning walking routes between a student's classes
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CampusRouteApp {
    /// select the operation to run
    #[command(subcommand)]
    pub op: CampusRouteOperation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// one summary line per row
    #[default]
    Text,
    /// the full route query result as JSON
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum CampusRouteOperation {
    /// loads a schedule and building dataset and reports what was found
    Summary {
        /// schedule sheet exported as CSV, or JSON rows
        #[arg(short, long)]
        schedule_file: PathBuf,
        /// building dataset CSV with pixel positions
        #[arg(short, long)]
        buildings_file: PathBuf,
        /// optional TOML or JSON configuration file
        #[arg(short, long)]
        config_file: Option<PathBuf>,
    },
    /// builds the walking route between the classes of one day
    Route {
        /// schedule sheet exported as CSV, or JSON rows
        #[arg(short, long)]
        schedule_file: PathBuf,
        /// building dataset CSV with pixel positions
        #[arg(short, long)]
        buildings_file: PathBuf,
        /// reference numbers (CRNs) separated by commas, semicolons or spaces
        #[arg(short, long)]
        references: String,
        /// day of the week, full name or three-letter abbreviation
        #[arg(short, long, value_parser = parse_day)]
        day: DayOfWeek,
        /// optional TOML or JSON configuration file
        #[arg(short, long)]
        config_file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl CampusRouteOperation {
    pub fn run(&self) -> Result<(), CampusRouteError> {
        match self {
            CampusRouteOperation::Summary {
                schedule_file,
                buildings_file,
                config_file,
            } => {
                let service = load_service(schedule_file, buildings_file, config_file.as_deref())?;
                println!("Loaded offerings: {}", service.index().len());
                println!("Buildings: {}", service.directory().len());
                println!(
                    "Distance scale: {:.1} meters per unit",
                    service.estimator().scale()
                );
                Ok(())
            }
            CampusRouteOperation::Route {
                schedule_file,
                buildings_file,
                references,
                day,
                config_file,
                format,
            } => {
                let service = load_service(schedule_file, buildings_file, config_file.as_deref())?;
                let result = service.query_text(references, *day)?;
                match format {
                    OutputFormat::Text => {
                        for line in result.report_lines() {
                            println!("{line}");
                        }
                    }
                    OutputFormat::Json => {
                        let json = serde_json::to_string_pretty(&result)
                            .map_err(|e| CampusRouteError::OutputError(e.to_string()))?;
                        println!("{json}");
                    }
                }
                Ok(())
            }
        }
    }
}

fn load_service(
    schedule_file: &Path,
    buildings_file: &Path,
    config_file: Option<&Path>,
) -> Result<CampusRouteService, CampusRouteError> {
    let config = CampusRouteConfig::load(config_file)?;
    let building_rows = input_ops::read_building_rows(buildings_file)?;
    let schedule_rows = input_ops::read_schedule_rows(schedule_file)?;
    CampusRouteService::load(&config, &schedule_rows, &building_rows)
}

fn parse_day(s: &str) -> Result<DayOfWeek, String> {
    s.parse::<DayOfWeek>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_arguments() {
        let app = CampusRouteApp::try_parse_from([
            "campus-route",
            "route",
            "--schedule-file",
            "schedule.csv",
            "--buildings-file",
            "buildings.csv",
            "--references",
            "61234,61235",
            "--day",
            "tue",
            "--format",
            "json",
        ])
        .expect("test invariant failed: arguments are valid");
        match app.op {
            CampusRouteOperation::Route { day, format, .. } => {
                assert_eq!(day, DayOfWeek::Tuesday);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("expected route operation, found {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_day() {
        let result = CampusRouteApp::try_parse_from([
            "campus-route",
            "route",
            "-s",
            "schedule.csv",
            "-b",
            "buildings.csv",
            "-r",
            "1",
            "-d",
            "someday",
        ]);
        assert!(result.is_err());
    }
}
