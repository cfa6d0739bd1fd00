use serde_json::{Map, Value};
use types::Record;

mod courses;
pub use courses::Courses;

mod enrollments;
pub use enrollments::Enrollments;

mod instructors;
pub use instructors::Instructors;

mod participants;
pub use participants::Participants;

mod rooms;
pub use rooms::Rooms;

/// The edited record's fields as the seed map for the entity dialog.
fn initial_data<F: serde::Serialize>(record: &Record<F>) -> Option<Map<String, Value>> {
    match serde_json::to_value(&record.fields) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
