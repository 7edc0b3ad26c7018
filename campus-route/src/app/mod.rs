mod campus_route_app;
mod campus_route_config;
mod campus_route_error;
mod campus_route_service;
pub mod input_ops;

pub use campus_route_app::{CampusRouteApp, CampusRouteOperation, OutputFormat};
pub use campus_route_config::CampusRouteConfig;
pub use campus_route_error::CampusRouteError;
pub use campus_route_service::{CampusRouteService, RouteQueryResult};
