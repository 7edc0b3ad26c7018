use std::collections::HashMap;
use std::sync::Arc;

use super::{CellValue, ColumnRoles, RawRow, ScheduleParseError};
use crate::model::building::BuildingDirectory;
use crate::model::schedule::{
    reference_number, ActivityKind, Course, CourseOffering, DayOfWeek, DeliveryMode, Instructor,
    MeetingSession, Room, TimeSlot,
};

/// turns decoded spreadsheet rows into course offerings.
///
/// a parser lives for one pass over one sheet. courses and instructors seen during
/// the pass are cached by key so that repeated rows share one instance; rooms
/// resolve their building through the directory, which synthesizes placeholders
/// for identifiers it does not know.
pub struct ScheduleParser<'a> {
    directory: &'a mut BuildingDirectory,
    courses: HashMap<String, Arc<Course>>,
    instructors: HashMap<String, Arc<Instructor>>,
}

impl<'a> ScheduleParser<'a> {
    pub fn new(directory: &'a mut BuildingDirectory) -> ScheduleParser<'a> {
        ScheduleParser {
            directory,
            courses: HashMap::new(),
            instructors: HashMap::new(),
        }
    }

    /// parses every row below the header into one offering per row, in row order.
    /// rows above the header and rows without a reference number are ignored.
    pub fn parse(mut self, rows: &[RawRow]) -> Result<Vec<CourseOffering>, ScheduleParseError> {
        let header_idx = rows
            .iter()
            .position(|row| ColumnRoles::is_header_row(row))
            .ok_or(ScheduleParseError::MissingHeaderRow(rows.len()))?;
        let roles = ColumnRoles::from_header(&rows[header_idx]);
        log::debug!("schedule header found at row {header_idx}: {roles:?}");

        let mut offerings: Vec<CourseOffering> = vec![];
        let mut skipped = 0;
        for (idx, row) in rows.iter().enumerate().skip(header_idx + 1) {
            match self.parse_row(row, &roles) {
                Some(offering) => offerings.push(offering),
                None => {
                    log::debug!("skipping schedule row {idx} without a reference number");
                    skipped += 1;
                }
            }
        }
        log::info!(
            "parsed {} offerings ({} courses, {} instructors), skipped {skipped} rows",
            offerings.len(),
            self.courses.len(),
            self.instructors.len()
        );
        Ok(offerings)
    }

    fn parse_row(&mut self, row: &[CellValue], roles: &ColumnRoles) -> Option<CourseOffering> {
        let reference = roles
            .reference
            .and_then(|col| row.get(col))
            .and_then(reference_number::normalize)?;
        let text = |col: Option<usize>| col.and_then(|c| row.get(c)).and_then(CellValue::as_text);

        let course = self.course(
            &text(roles.course).unwrap_or_default(),
            &text(roles.title).unwrap_or_default(),
            text(roles.department).as_deref(),
        );
        let instructors = text(roles.instructor)
            .and_then(|name| self.instructor(&name))
            .into_iter()
            .collect::<Vec<_>>();

        let modality = text(roles.modality).unwrap_or_default();
        let activity = ActivityKind::from_modality(&modality);
        let delivery_mode = DeliveryMode::from_modality(&modality);

        let time_slot = text(roles.time).and_then(|t| {
            let slot = TimeSlot::parse(&t);
            if slot.is_none() {
                log::debug!("offering {reference} has malformed time '{t}', no sessions created");
            }
            slot
        });
        let room = text(roles.building).map(|building_id| {
            let building = self.directory.get_or_create(&building_id);
            Room::new(building, &text(roles.room).unwrap_or_default())
        });
        let days = text(roles.days).unwrap_or_default();

        let sessions = match (time_slot, room) {
            (Some(time_slot), Some(room)) if !days.is_empty() => DayOfWeek::expand_codes(&days)
                .into_iter()
                .map(|day| MeetingSession {
                    day,
                    time_slot: time_slot.clone(),
                    room: room.clone(),
                    activity,
                })
                .collect(),
            _ => vec![],
        };

        Some(CourseOffering {
            reference,
            course,
            delivery_mode,
            sessions,
            instructors,
        })
    }

    fn course(&mut self, code: &str, title: &str, department: Option<&str>) -> Arc<Course> {
        let course = Course::new(code, title, department);
        self.courses
            .entry(course.code.clone())
            .or_insert_with(|| Arc::new(course))
            .clone()
    }

    fn instructor(&mut self, full_name: &str) -> Option<Arc<Instructor>> {
        let instructor = Instructor::from_full_name(full_name)?;
        let shared = self
            .instructors
            .entry(instructor.full_name())
            .or_insert_with(|| Arc::new(instructor))
            .clone();
        Some(shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| CellValue::from_field(c)).collect()
    }

    fn header() -> RawRow {
        row(&[
            "CRN", "Course", "Title", "Modality", "Days", "Time", "Building", "Room", "Instructor",
        ])
    }

    fn directory() -> BuildingDirectory {
        let rows = vec![
            vec!["11".to_string(), "Library".into(), "200".into(), "300".into()],
            vec!["59".to_string(), "Engineering".into(), "600".into(), "300".into()],
        ];
        let mut directory = BuildingDirectory::new();
        directory
            .initialize(&rows, 1000.0, 1000.0)
            .expect("test invariant failed: building rows are valid");
        directory
    }

    #[test]
    fn test_parse_single_row() {
        let mut directory = directory();
        let mut data_row = row(&[
            "", "CS101", "Intro", "LEC", "MW", "09:00-09:50", "11", "101", "Ada Lovelace",
        ]);
        data_row[0] = CellValue::Number(61234.0);
        let offerings = ScheduleParser::new(&mut directory)
            .parse(&[header(), data_row])
            .expect("test invariant failed: schedule is valid");
        assert_eq!(offerings.len(), 1);
        let offering = &offerings[0];
        assert_eq!(offering.reference, "61234");
        assert_eq!(offering.course.code, "CS101");
        assert_eq!(offering.course.title, "Intro");
        assert_eq!(offering.delivery_mode, DeliveryMode::Lecture);
        assert_eq!(offering.instructors.len(), 1);
        let days = offering.sessions.iter().map(|s| s.day).collect::<Vec<_>>();
        assert_eq!(days, vec![DayOfWeek::Monday, DayOfWeek::Wednesday]);
        let session = &offering.sessions[0];
        assert_eq!(session.room.building.name, "Library");
        assert_eq!(session.room.floor, 1);
        assert_eq!(session.time_slot.start(), "09:00");
        assert_eq!(session.activity, ActivityKind::Lecture);
    }

    #[test]
    fn test_header_may_follow_preamble_rows() {
        let mut directory = directory();
        let rows = vec![
            row(&["Spring Schedule"]),
            row(&[]),
            header(),
            row(&["100", "MATH1", "", "LAB", "T", "10:00-10:50", "59", "2B", ""]),
        ];
        let offerings = ScheduleParser::new(&mut directory)
            .parse(&rows)
            .expect("test invariant failed: schedule is valid");
        assert_eq!(offerings.len(), 1);
        assert_eq!(offerings[0].course.title, "MATH1");
        assert_eq!(offerings[0].delivery_mode, DeliveryMode::Lab);
        assert!(offerings[0].instructors.is_empty());
        assert_eq!(offerings[0].sessions[0].day, DayOfWeek::Tuesday);
    }

    #[test]
    fn test_missing_header_row() {
        let mut directory = directory();
        let rows = vec![row(&["Course", "Title"]), row(&["CS101", "Intro"])];
        let result = ScheduleParser::new(&mut directory).parse(&rows);
        assert!(matches!(result, Err(ScheduleParseError::MissingHeaderRow(2))));
    }

    #[test]
    fn test_rows_without_reference_are_skipped() {
        let mut directory = directory();
        let rows = vec![
            header(),
            row(&["", "CS101", "Intro", "LEC", "M", "09:00-09:50", "11", "101", ""]),
            row(&["200.0", "CS102", "Data", "LEC", "M", "11:00-11:50", "11", "101", ""]),
        ];
        let offerings = ScheduleParser::new(&mut directory)
            .parse(&rows)
            .expect("test invariant failed: schedule is valid");
        assert_eq!(offerings.len(), 1);
        assert_eq!(offerings[0].reference, "200");
    }

    #[test]
    fn test_malformed_time_or_missing_room_yield_no_sessions() {
        let mut directory = directory();
        let rows = vec![
            header(),
            row(&["1", "CS101", "", "LEC", "MW", "09:00", "11", "101", ""]),
            row(&["2", "CS102", "", "LEC", "MW", "09:00-09:50-10:00", "11", "101", ""]),
            row(&["3", "CS103", "", "LEC", "MW", "09:00-09:50", "", "101", ""]),
            row(&["4", "CS104", "", "LEC", "", "09:00-09:50", "11", "101", ""]),
            row(&["5", "CS105", "", "LEC", "XZ", "09:00-09:50", "11", "101", ""]),
        ];
        let offerings = ScheduleParser::new(&mut directory)
            .parse(&rows)
            .expect("test invariant failed: schedule is valid");
        assert_eq!(offerings.len(), 5);
        assert!(offerings.iter().all(|o| o.sessions.is_empty()));
    }

    #[test]
    fn test_unknown_building_gets_placeholder() {
        let mut directory = directory();
        let rows = vec![
            header(),
            row(&["1", "CS101", "", "LEC", "F", "09:00-09:50", "77", "", ""]),
        ];
        let offerings = ScheduleParser::new(&mut directory)
            .parse(&rows)
            .expect("test invariant failed: schedule is valid");
        let room = &offerings[0].sessions[0].room;
        assert_eq!(room.building.name, "Building 77");
        assert_eq!(room.identifier, Room::UNKNOWN_IDENTIFIER);
        assert!(directory.find("77").is_some());
    }

    #[test]
    fn test_courses_and_instructors_are_shared() {
        let mut directory = directory();
        let rows = vec![
            header(),
            row(&["1", "CS101", "Intro", "LEC", "M", "09:00-09:50", "11", "101", "Ada Lovelace"]),
            row(&["2", "CS101", "Intro", "LAB", "T", "13:00-14:50", "59", "201", "Ada Lovelace"]),
        ];
        let offerings = ScheduleParser::new(&mut directory)
            .parse(&rows)
            .expect("test invariant failed: schedule is valid");
        assert!(Arc::ptr_eq(&offerings[0].course, &offerings[1].course));
        assert!(Arc::ptr_eq(&offerings[0].instructors[0], &offerings[1].instructors[0]));
    }

    #[test]
    fn test_missing_columns_degrade_to_empty_fields() {
        let mut directory = directory();
        let rows = vec![row(&["crn"]), row(&["42"])];
        let offerings = ScheduleParser::new(&mut directory)
            .parse(&rows)
            .expect("test invariant failed: schedule is valid");
        assert_eq!(offerings.len(), 1);
        assert_eq!(offerings[0].course.code, Course::UNKNOWN_CODE);
        assert_eq!(offerings[0].delivery_mode, DeliveryMode::Other);
        assert!(offerings[0].sessions.is_empty());
    }
}
