use serde::{Deserialize, Serialize};

/// kind of meeting a session represents, classified from the modality column.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Lecture,
    Lab,
    Internship,
    #[default]
    Other,
}

impl ActivityKind {
    /// case-insensitive substring rules, first match wins: `LEC`, then `LAB`, then `INT`.
    pub fn from_modality(modality: &str) -> ActivityKind {
        let upper = modality.to_uppercase();
        if upper.contains("LEC") {
            ActivityKind::Lecture
        } else if upper.contains("LAB") {
            ActivityKind::Lab
        } else if upper.contains("INT") {
            ActivityKind::Internship
        } else {
            ActivityKind::Other
        }
    }
}
