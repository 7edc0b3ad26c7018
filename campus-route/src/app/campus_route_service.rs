use itertools::Itertools;
use serde::Serialize;

use super::{CampusRouteConfig, CampusRouteError};
use crate::model::{
    building::BuildingDirectory,
    itinerary::build_itinerary,
    parser::{RawRow, ScheduleParser},
    route::{DistanceEstimator, RoutePlanner, RouteVisualizationModel},
    schedule::{reference_number, DayOfWeek, ScheduleIndex},
};

/// a loaded schedule together with the campus buildings it refers to. both are
/// read-only once loaded; each query derives its route from them.
#[derive(Debug, Clone)]
pub struct CampusRouteService {
    directory: BuildingDirectory,
    index: ScheduleIndex,
    planner: RoutePlanner,
}

/// the outcome of one route query. references that matched no offering are
/// reported next to the route built from the ones that did.
#[derive(Debug, Clone, Serialize)]
pub struct RouteQueryResult<'a> {
    pub model: RouteVisualizationModel<'a>,
    pub missing_references: Vec<String>,
}

impl RouteQueryResult<'_> {
    /// summary lines, preceded by a notice naming any missing references.
    pub fn report_lines(&self) -> Vec<String> {
        let notice = (!self.missing_references.is_empty()).then(|| {
            format!("Missing references: {}", self.missing_references.join(", "))
        });
        notice
            .into_iter()
            .chain(self.model.summary.iter().cloned())
            .collect()
    }
}

impl CampusRouteService {
    /// builds the building directory, parses the schedule and calibrates distances.
    ///
    /// # Arguments
    ///
    /// * `config` - image dimensions, calibration buildings and duplicate handling
    /// * `schedule_rows` - decoded schedule sheet, header row included
    /// * `building_rows` - building dataset records
    ///
    /// # Returns
    ///
    /// * the loaded service, or the first structural failure. nothing is partially
    ///   loaded on failure.
    pub fn load(
        config: &CampusRouteConfig,
        schedule_rows: &[RawRow],
        building_rows: &[Vec<String>],
    ) -> Result<CampusRouteService, CampusRouteError> {
        config.validate()?;
        let mut directory = BuildingDirectory::new();
        directory.initialize(building_rows, config.image_width, config.image_height)?;
        let offerings = ScheduleParser::new(&mut directory).parse(schedule_rows)?;
        let index = ScheduleIndex::build(offerings, config.duplicate_reference_policy);
        let estimator = DistanceEstimator::calibrate(&directory, &config.calibration);
        log::info!(
            "loaded {} offerings across {} buildings",
            index.len(),
            directory.len()
        );
        Ok(CampusRouteService {
            directory,
            index,
            planner: RoutePlanner::new(estimator),
        })
    }

    /// builds the route for the offerings named by `references` on `day`. each
    /// reference is normalized before lookup and repeats are ignored.
    pub fn query<S: AsRef<str>>(
        &self,
        references: &[S],
        day: DayOfWeek,
    ) -> Result<RouteQueryResult<'_>, CampusRouteError> {
        let references = references
            .iter()
            .filter_map(|r| reference_number::normalize_text(r.as_ref()))
            .unique()
            .collect::<Vec<_>>();
        if references.is_empty() {
            return Err(CampusRouteError::NoReferencesProvided);
        }
        let found = self.index.find_all_by_references(&references);
        let missing_references = references
            .iter()
            .filter(|r| self.index.find_by_reference(r).is_none())
            .cloned()
            .collect::<Vec<_>>();
        if !missing_references.is_empty() {
            log::warn!(
                "reference numbers not in schedule: {}",
                missing_references.join(", ")
            );
        }
        let itinerary = build_itinerary(found, day);
        Ok(RouteQueryResult {
            model: self.planner.build_visualization(itinerary),
            missing_references,
        })
    }

    /// like [`CampusRouteService::query`], for a typed list separated by commas,
    /// semicolons or whitespace.
    pub fn query_text(
        &self,
        references: &str,
        day: DayOfWeek,
    ) -> Result<RouteQueryResult<'_>, CampusRouteError> {
        self.query(&reference_number::parse_reference_list(references), day)
    }

    pub fn directory(&self) -> &BuildingDirectory {
        &self.directory
    }

    pub fn index(&self) -> &ScheduleIndex {
        &self.index
    }

    pub fn estimator(&self) -> &DistanceEstimator {
        self.planner.estimator()
    }
}
