use indexmap::{map::Entry, IndexMap};

use super::{reference_number, CourseOffering, DuplicateReferencePolicy};

/// the loaded schedule: every offering, indexed by normalized reference number in
/// first-seen order.
#[derive(Debug, Default, Clone)]
pub struct ScheduleIndex {
    offerings: IndexMap<String, CourseOffering>,
}

impl ScheduleIndex {
    pub fn build(
        offerings: Vec<CourseOffering>,
        policy: DuplicateReferencePolicy,
    ) -> ScheduleIndex {
        let n_rows = offerings.len();
        let mut index: IndexMap<String, CourseOffering> = IndexMap::with_capacity(n_rows);
        for offering in offerings {
            match index.entry(offering.reference.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(offering);
                }
                Entry::Occupied(mut entry) => {
                    log::debug!(
                        "reference number '{}' repeats, applying {policy:?}",
                        offering.reference
                    );
                    match policy {
                        DuplicateReferencePolicy::KeepFirst => {}
                        DuplicateReferencePolicy::KeepLast => {
                            entry.insert(offering);
                        }
                        DuplicateReferencePolicy::MergeSessions => entry.get_mut().merge(offering),
                    }
                }
            }
        }
        if index.len() < n_rows {
            log::info!(
                "indexed {} offerings from {n_rows} rows ({} repeated reference numbers)",
                index.len(),
                n_rows - index.len()
            );
        }
        ScheduleIndex { offerings: index }
    }

    /// lookup by reference number. the argument is normalized first, so `"12345.0"`
    /// finds the offering stored as `"12345"`.
    pub fn find_by_reference(&self, reference: &str) -> Option<&CourseOffering> {
        let key = reference_number::normalize_text(reference)?;
        self.offerings.get(&key)
    }

    /// the offerings found for `references`, in request order. misses are skipped.
    pub fn find_all_by_references<S: AsRef<str>>(&self, references: &[S]) -> Vec<&CourseOffering> {
        references
            .iter()
            .filter_map(|r| self.find_by_reference(r.as_ref()))
            .collect()
    }

    pub fn all_offerings(&self) -> impl Iterator<Item = &CourseOffering> {
        self.offerings.values()
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::building::Building;
    use crate::model::schedule::{
        ActivityKind, Course, DayOfWeek, DeliveryMode, Instructor, MeetingSession, Room, TimeSlot,
    };
    use std::sync::Arc;

    fn offering(reference: &str, day: DayOfWeek, instructor: Option<&str>) -> CourseOffering {
        let room = Room::new(Arc::new(Building::placeholder("11")), "101");
        CourseOffering {
            reference: reference.to_string(),
            course: Arc::new(Course::new("CS101", "Intro", None)),
            delivery_mode: DeliveryMode::Lecture,
            sessions: vec![MeetingSession {
                day,
                time_slot: TimeSlot::new("09:00", "09:50"),
                room,
                activity: ActivityKind::Lecture,
            }],
            instructors: instructor
                .and_then(Instructor::from_full_name)
                .map(Arc::new)
                .into_iter()
                .collect(),
        }
    }

    fn duplicate_rows() -> Vec<CourseOffering> {
        vec![
            offering("100", DayOfWeek::Monday, None),
            offering("200", DayOfWeek::Monday, None),
            offering("100", DayOfWeek::Tuesday, Some("Grace Hopper")),
        ]
    }

    #[test]
    fn test_find_by_reference() {
        let index = ScheduleIndex::build(duplicate_rows(), DuplicateReferencePolicy::KeepFirst);
        assert_eq!(index.len(), 2);
        assert!(index.find_by_reference("200").is_some());
        assert!(index.find_by_reference("200.0").is_some());
        assert!(index.find_by_reference(" 200 ").is_some());
        assert!(index.find_by_reference("300").is_none());
    }

    #[test]
    fn test_find_all_preserves_request_order_and_skips_misses() {
        let index = ScheduleIndex::build(duplicate_rows(), DuplicateReferencePolicy::KeepFirst);
        let found = index.find_all_by_references(&["200", "999", "100"]);
        let refs = found.iter().map(|o| o.reference.as_str()).collect::<Vec<_>>();
        assert_eq!(refs, vec!["200", "100"]);
    }

    #[test]
    fn test_keep_first() {
        let index = ScheduleIndex::build(duplicate_rows(), DuplicateReferencePolicy::KeepFirst);
        let found = index.find_by_reference("100").expect("offering indexed");
        assert_eq!(found.sessions.len(), 1);
        assert_eq!(found.sessions[0].day, DayOfWeek::Monday);
        assert!(found.instructors.is_empty());
    }

    #[test]
    fn test_keep_last() {
        let index = ScheduleIndex::build(duplicate_rows(), DuplicateReferencePolicy::KeepLast);
        let found = index.find_by_reference("100").expect("offering indexed");
        assert_eq!(found.sessions.len(), 1);
        assert_eq!(found.sessions[0].day, DayOfWeek::Tuesday);
        let order = index.all_offerings().map(|o| o.reference.as_str()).collect::<Vec<_>>();
        assert_eq!(order, vec!["100", "200"]);
    }

    #[test]
    fn test_merge_sessions() {
        let index =
            ScheduleIndex::build(duplicate_rows(), DuplicateReferencePolicy::MergeSessions);
        let found = index.find_by_reference("100").expect("offering indexed");
        let days = found.sessions.iter().map(|s| s.day).collect::<Vec<_>>();
        assert_eq!(days, vec![DayOfWeek::Monday, DayOfWeek::Tuesday]);
        assert_eq!(found.instructors.len(), 1);
        assert_eq!(found.instructors[0].full_name(), "Grace Hopper");
    }
}
