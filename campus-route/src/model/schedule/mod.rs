mod activity_kind;
mod course;
mod course_offering;
mod day_of_week;
mod delivery_mode;
mod duplicate_reference_policy;
mod instructor;
mod meeting_session;
mod room;
mod schedule_index;
mod time_slot;

pub mod reference_number;

pub use activity_kind::ActivityKind;
pub use course::Course;
pub use course_offering::CourseOffering;
pub use day_of_week::DayOfWeek;
pub use delivery_mode::DeliveryMode;
pub use duplicate_reference_policy::DuplicateReferencePolicy;
pub use instructor::Instructor;
pub use meeting_session::MeetingSession;
pub use room::Room;
pub use schedule_index::ScheduleIndex;
pub use time_slot::TimeSlot;
