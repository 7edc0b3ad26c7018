use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// one decoded spreadsheet row, in column order.
pub type RawRow = Vec<CellValue>;

/// a decoded spreadsheet cell. JSON input maps `null`, numbers and strings onto the
/// three variants directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// builds a cell from delimited-text input, where every non-blank field is text.
    pub fn from_field(field: &str) -> CellValue {
        if field.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(field.to_string())
        }
    }

    /// trimmed text of the cell, or None when it is empty or blank. whole numbers are
    /// written without a fractional part, so a numeric building code `11.0` reads `11`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(n) => Some(self.to_string()).filter(|_| n.is_finite()),
            CellValue::Text(t) => Some(t.trim().to_string()).filter(|t| !t.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_none()
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(t) => write!(f, "{t}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}
