mod building;
mod building_directory;
mod building_error;

pub use building::Building;
pub use building_directory::BuildingDirectory;
pub use building_error::BuildingError;
