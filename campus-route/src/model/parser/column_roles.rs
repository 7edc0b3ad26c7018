use super::CellValue;

/// column positions resolved from the header row. a role without a matching header
/// is None, and every row then reads that field as empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColumnRoles {
    pub reference: Option<usize>,
    pub course: Option<usize>,
    pub title: Option<usize>,
    pub department: Option<usize>,
    pub modality: Option<usize>,
    pub days: Option<usize>,
    pub time: Option<usize>,
    pub building: Option<usize>,
    pub room: Option<usize>,
    pub instructor: Option<usize>,
}

impl ColumnRoles {
    /// true when some cell of `row` mentions CRN, case-insensitive.
    pub fn is_header_row(row: &[CellValue]) -> bool {
        row.iter().any(|cell| {
            cell.as_text()
                .is_some_and(|text| text.to_uppercase().contains("CRN"))
        })
    }

    /// matches each role against the lowercased header text by substring. the first
    /// matching column wins.
    pub fn from_header(header: &[CellValue]) -> ColumnRoles {
        let headers = header
            .iter()
            .map(|cell| cell.as_text().unwrap_or_default().to_lowercase())
            .collect::<Vec<_>>();
        let find = |predicate: &dyn Fn(&str) -> bool| {
            headers.iter().position(|h| predicate(h.as_str()))
        };
        ColumnRoles {
            reference: find(&|h| h.contains("crn")),
            course: find(&|h| h.contains("course") && !h.contains("title")),
            title: find(&|h| h.contains("title")),
            department: find(&|h| h.contains("department") || h == "dept"),
            modality: find(&|h| h.contains("modality")),
            days: find(&|h| h.contains("days")),
            time: find(&|h| h.contains("time")),
            building: find(&|h| h.contains("building") || h.contains("bldg")),
            room: find(&|h| h.contains("room")),
            instructor: find(&|h| h.contains("instructor")),
        }
    }
}
