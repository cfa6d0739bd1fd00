mod error;
mod record;
mod reference;

pub use error::{Error, Result};
pub use record::{
    Course, CourseFields, Enrollment, EnrollmentFields, Instructor, InstructorFields, Participant,
    ParticipantFields, Record, Room, RoomFields,
};
pub use reference::{Collection, PLACEHOLDER, RecordRef, resolve_label};

// Backing for the `err!` macro; not part of the public API.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
