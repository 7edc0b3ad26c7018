mod calibration_config;
mod distance_estimator;
mod route_path;
mod route_planner;
mod route_segment;
mod route_visualization_model;

pub use calibration_config::CalibrationConfig;
pub use distance_estimator::DistanceEstimator;
pub use route_path::RoutePath;
pub use route_planner::RoutePlanner;
pub use route_segment::RouteSegment;
pub use route_visualization_model::RouteVisualizationModel;
