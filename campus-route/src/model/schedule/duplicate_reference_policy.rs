use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how the schedule index treats several rows sharing a reference number, such as
/// a lecture row followed by a lab row for the same section.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateReferencePolicy {
    /// the first row wins, later rows are discarded
    KeepFirst,
    /// the last row wins, replacing earlier rows
    KeepLast,
    /// later rows contribute their sessions to the first row's offering
    #[default]
    MergeSessions,
}
