use serde_json::Value;

use super::{CellValue, RawRow, ScheduleParseError};

/// converts a decoded JSON sheet (an array of arrays of scalar cells) into rows.
/// booleans are kept as text; nested arrays or objects are rejected.
pub fn rows_from_json(value: &Value) -> Result<Vec<RawRow>, ScheduleParseError> {
    let rows = value.as_array().ok_or_else(|| {
        let msg = format!("expected an array of rows, found {}", kind(value));
        ScheduleParseError::NotRowShaped(msg)
    })?;
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let cells = row.as_array().ok_or_else(|| {
                let msg = format!("row {idx} is {}, not an array", kind(row));
                ScheduleParseError::NotRowShaped(msg)
            })?;
            cells
                .iter()
                .map(|cell| match cell {
                    Value::Null => Ok(CellValue::Empty),
                    Value::Number(n) => n.as_f64().map(CellValue::Number).ok_or_else(|| {
                        let msg = format!("row {idx} has unreadable number {n}");
                        ScheduleParseError::NotRowShaped(msg)
                    }),
                    Value::String(s) => Ok(CellValue::Text(s.clone())),
                    Value::Bool(b) => Ok(CellValue::Text(b.to_string())),
                    other => Err(ScheduleParseError::NotRowShaped(format!(
                        "row {idx} contains {}, expected a scalar cell",
                        kind(other)
                    ))),
                })
                .collect::<Result<RawRow, _>>()
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
