use serde::{Deserialize, Serialize};

/// One entity instance from the record service: the service-assigned
/// identifier plus the collection-specific field map.
///
/// Every field is optional on the wire; requiredness is enforced by the
/// entity forms, not the data model. `None` fields are omitted from
/// serialized payloads so create/update calls only carry what the form
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub record_id: String,
    pub fields: F,
}

pub type Course = Record<CourseFields>;
pub type Instructor = Record<InstructorFields>;
pub type Participant = Record<ParticipantFields>;
pub type Room = Record<RoomFields>;
pub type Enrollment = Record<EnrollmentFields>;

/// The serde renames map to the record service's field names, which are
/// also the keys the entity forms produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseFields {
    #[serde(rename = "titel", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "beschreibung", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "startdatum", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "enddatum", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "max_teilnehmer", skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i64>,
    #[serde(rename = "preis", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Reference locator into the instructors collection.
    #[serde(rename = "dozent", skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    /// Reference locator into the rooms collection.
    #[serde(rename = "raum", skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructorFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefon", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "fachgebiet", skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefon", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "geburtsdatum", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomFields {
    #[serde(rename = "raumname", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "gebaeude", skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(rename = "kapazitaet", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentFields {
    /// Reference locator into the participants collection.
    #[serde(rename = "teilnehmer", skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
    /// Reference locator into the courses collection.
    #[serde(rename = "kurs", skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// ISO 8601 date string.
    #[serde(rename = "anmeldedatum", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "bezahlt", skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_serialize_to_service_names_and_omit_none() {
        let fields = RoomFields {
            name: Some("Lab A".into()),
            building: None,
            capacity: Some(20),
        };
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value, json!({ "raumname": "Lab A", "kapazitaet": 20 }));
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let course: CourseFields = serde_json::from_value(json!({ "titel": "Intro" })).unwrap();
        assert_eq!(course.title.as_deref(), Some("Intro"));
        assert_eq!(course.price, None);
        assert_eq!(course.instructor, None);
    }

    #[test]
    fn cleaned_form_payload_deserializes_into_fields() {
        let payload = json!({
            "titel": "Rust für Einsteiger",
            "max_teilnehmer": 12,
            "preis": 99.5,
        });
        let fields: CourseFields = serde_json::from_value(payload).unwrap();
        assert_eq!(fields.max_participants, Some(12));
        assert_eq!(fields.price, Some(99.5));
        assert_eq!(fields.description, None);
    }

    #[test]
    fn record_round_trips() {
        let record = Record {
            record_id: "rec1".to_string(),
            fields: EnrollmentFields {
                paid: Some(true),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(&record).unwrap();
        let back: Enrollment = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
