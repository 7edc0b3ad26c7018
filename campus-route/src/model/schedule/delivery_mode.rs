use serde::{Deserialize, Serialize};

use super::ActivityKind;

/// overall delivery mode of an offering. shares the modality rules of [`ActivityKind`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    Lecture,
    Lab,
    Internship,
    #[default]
    Other,
}

impl DeliveryMode {
    pub fn from_modality(modality: &str) -> DeliveryMode {
        DeliveryMode::from(ActivityKind::from_modality(modality))
    }
}

impl From<ActivityKind> for DeliveryMode {
    fn from(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Lecture => DeliveryMode::Lecture,
            ActivityKind::Lab => DeliveryMode::Lab,
            ActivityKind::Internship => DeliveryMode::Internship,
            ActivityKind::Other => DeliveryMode::Other,
        }
    }
}
