//! readers for the schedule and building files consumed by the service.
use std::{fs::File, io::Read, path::Path};

use super::CampusRouteError;
use crate::model::parser::{rows_from_json, CellValue, RawRow};

/// reads a schedule sheet. `.json` files hold an array of rows of `null`, number
/// or string cells; any other file is read as headerless CSV.
pub fn read_schedule_rows(path: &Path) -> Result<Vec<RawRow>, CampusRouteError> {
    let filepath = path.display().to_string();
    let file = File::open(path).map_err(|source| CampusRouteError::FileReadError {
        filepath: filepath.clone(),
        source,
    })?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let rows = if is_json {
        let value: serde_json::Value =
            serde_json::from_reader(file).map_err(|source| CampusRouteError::JsonReadError {
                filepath: filepath.clone(),
                source,
            })?;
        rows_from_json(&value)?
    } else {
        schedule_rows_from_csv(file).map_err(|source| CampusRouteError::CsvReadError {
            filepath: filepath.clone(),
            source,
        })?
    };
    log::info!("read {} schedule rows from {filepath}", rows.len());
    Ok(rows)
}

/// decodes CSV schedule rows. records may differ in length, and no record is
/// treated as a header since the sheet locates its own header row.
pub fn schedule_rows_from_csv<R: Read>(reader: R) -> Result<Vec<RawRow>, csv::Error> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
        .records()
        .map(|record| record.map(|r| r.iter().map(CellValue::from_field).collect::<RawRow>()))
        .collect()
}

pub fn read_building_rows(path: &Path) -> Result<Vec<Vec<String>>, CampusRouteError> {
    let filepath = path.display().to_string();
    let file = File::open(path).map_err(|source| CampusRouteError::FileReadError {
        filepath: filepath.clone(),
        source,
    })?;
    let rows = building_rows_from_csv(file)
        .map_err(|source| CampusRouteError::CsvReadError { filepath, source })?;
    Ok(rows)
}

/// decodes `identifier,name,pixel_x,pixel_y[,entrance_x,entrance_y]*` records. a
/// first record whose pixel fields are not numbers is a header and is dropped.
pub fn building_rows_from_csv<R: Read>(reader: R) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .records()
        .map(|record| record.map(|r| r.iter().map(String::from).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, csv::Error>>()?;
    if rows.first().is_some_and(|first| is_header(first)) {
        log::debug!("dropping building header {:?}", rows[0]);
        rows.remove(0);
    }
    Ok(rows)
}

fn is_header(record: &[String]) -> bool {
    record
        .get(2..4)
        .is_some_and(|pixels| pixels.iter().any(|p| p.parse::<f64>().is_err()))
}
