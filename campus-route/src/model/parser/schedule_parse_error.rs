#[derive(thiserror::Error, Debug)]
pub enum ScheduleParseError {
    #[error("could not find a header row with a CRN column in {0} rows")]
    MissingHeaderRow(usize),
    #[error("schedule data is not a sequence of rows: {0}")]
    NotRowShaped(String),
}
