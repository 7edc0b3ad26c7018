use serde::Serialize;
use std::sync::Arc;

use crate::model::building::Building;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub building: Arc<Building>,
    /// taken from the first character of the room code, 0 when it is not a digit
    pub floor: u32,
    pub identifier: String,
}

impl Room {
    pub const UNKNOWN_IDENTIFIER: &'static str = "Unknown";

    pub fn new(building: Arc<Building>, room_code: &str) -> Room {
        let code = room_code.trim();
        let floor = code
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(0);
        let identifier = if code.is_empty() {
            Self::UNKNOWN_IDENTIFIER.to_string()
        } else {
            code.to_string()
        };
        Room {
            building,
            floor,
            identifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_from_first_character() {
        let building = Arc::new(Building::placeholder("11"));
        assert_eq!(Room::new(building.clone(), "204").floor, 2);
        assert_eq!(Room::new(building.clone(), "B12").floor, 0);
        assert_eq!(Room::new(building.clone(), "1A").floor, 1);
        let blank = Room::new(building, "  ");
        assert_eq!(blank.floor, 0);
        assert_eq!(blank.identifier, "Unknown");
    }
}
