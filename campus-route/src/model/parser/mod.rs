mod cell_value;
mod column_roles;
mod raw_rows;
mod schedule_parse_error;
mod schedule_parser;

pub use cell_value::{CellValue, RawRow};
pub use column_roles::ColumnRoles;
pub use raw_rows::rows_from_json;
pub use schedule_parse_error::ScheduleParseError;
pub use schedule_parser::ScheduleParser;
