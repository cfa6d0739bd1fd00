use serde::{Deserialize, Serialize};

use crate::Record;

/// Rendered in place of any reference that cannot be resolved.
pub const PLACEHOLDER: &str = "—";

const LOCATOR_BASE: &str = "https://my.living-apps.de/apps";

/// The five record collections of the course school, each tied to its
/// application id on the record service. This is the only place those ids
/// are spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collection {
    Courses,
    Instructors,
    Participants,
    Rooms,
    Enrollments,
}

impl Collection {
    pub fn app_id(self) -> &'static str {
        match self {
            Collection::Courses => "67a3c01f8e92d45b1c06f2ae",
            Collection::Instructors => "67a3c0348e92d45b1c06f2b1",
            Collection::Participants => "67a3c04b8e92d45b1c06f2b4",
            Collection::Rooms => "67a3c0598e92d45b1c06f2b7",
            Collection::Enrollments => "67a3c06e8e92d45b1c06f2ba",
        }
    }
}

/// A cross-collection reference: which application a record lives in, and
/// which record. Stored and transported as a locator URL; this type and its
/// two conversions are the only code that understands that format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRef {
    pub app_id: String,
    pub record_id: String,
}

impl RecordRef {
    pub fn new(collection: Collection, record_id: impl Into<String>) -> Self {
        Self {
            app_id: collection.app_id().to_string(),
            record_id: record_id.into(),
        }
    }

    /// The locator URL stored in reference fields.
    pub fn locator(&self) -> String {
        format!(
            "{LOCATOR_BASE}/{}/records/{}",
            self.app_id, self.record_id
        )
    }

    /// Inverse of [`RecordRef::locator`]. Returns `None` for anything that
    /// is not a well-formed locator; callers degrade to [`PLACEHOLDER`].
    pub fn parse(locator: &str) -> Option<Self> {
        let rest = locator.strip_prefix(LOCATOR_BASE)?.strip_prefix('/')?;
        let mut segments = rest.trim_end_matches('/').split('/');

        let app_id = segments.next().filter(|s| !s.is_empty())?;
        if segments.next() != Some("records") {
            return None;
        }
        let record_id = segments.next().filter(|s| !s.is_empty())?;
        if segments.next().is_some() {
            return None;
        }

        Some(Self {
            app_id: app_id.to_string(),
            record_id: record_id.to_string(),
        })
    }
}

/// Resolve a stored reference against an in-memory candidate list.
///
/// Returns the referenced record's display value, or [`PLACEHOLDER`] when
/// the reference is absent, malformed, points at no loaded record, or the
/// record lacks the display field. Dangling references (a deleted target)
/// therefore render as the placeholder instead of failing.
pub fn resolve_label<F>(
    reference: Option<&str>,
    candidates: &[Record<F>],
    display: impl Fn(&F) -> Option<&str>,
) -> String {
    let Some(referenced) = reference.and_then(RecordRef::parse) else {
        return PLACEHOLDER.to_string();
    };

    candidates
        .iter()
        .find(|record| record.record_id == referenced.record_id)
        .and_then(|record| display(&record.fields))
        .map_or_else(|| PLACEHOLDER.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParticipantFields;

    fn participant(record_id: &str, name: Option<&str>) -> Record<ParticipantFields> {
        Record {
            record_id: record_id.to_string(),
            fields: ParticipantFields {
                name: name.map(str::to_string),
                ..Default::default()
            },
        }
    }

    #[test]
    fn locator_round_trips() {
        let reference = RecordRef::new(Collection::Participants, "rec42");
        let parsed = RecordRef::parse(&reference.locator()).unwrap();
        assert_eq!(parsed, reference);
        assert_eq!(parsed.record_id, "rec42");
    }

    #[test]
    fn parse_tolerates_trailing_slash() {
        let locator = format!("{}/", RecordRef::new(Collection::Rooms, "r1").locator());
        assert_eq!(RecordRef::parse(&locator).unwrap().record_id, "r1");
    }

    #[test]
    fn parse_rejects_malformed_locators() {
        for locator in [
            "",
            "rec42",
            "https://example.com/apps/a/records/r",
            "https://my.living-apps.de/apps/a/r",
            "https://my.living-apps.de/apps/a/records/",
            "https://my.living-apps.de/apps/a/records/r/extra",
        ] {
            assert_eq!(RecordRef::parse(locator), None, "accepted {locator:?}");
        }
    }

    #[test]
    fn resolves_known_reference_to_display_field() {
        let candidates = vec![participant("p1", Some("Jane")), participant("p2", Some("Joe"))];
        let locator = RecordRef::new(Collection::Participants, "p2").locator();
        let label = resolve_label(Some(&locator), &candidates, |f| f.name.as_deref());
        assert_eq!(label, "Joe");
    }

    #[test]
    fn unresolved_references_degrade_to_placeholder() {
        let candidates = vec![participant("p1", Some("Jane"))];
        let dangling = RecordRef::new(Collection::Participants, "gone").locator();

        for reference in [None, Some("not a locator"), Some(dangling.as_str())] {
            let label = resolve_label(reference, &candidates, |f| f.name.as_deref());
            assert_eq!(label, PLACEHOLDER);
        }
    }

    #[test]
    fn missing_display_field_degrades_to_placeholder() {
        let candidates = vec![participant("p1", None)];
        let locator = RecordRef::new(Collection::Participants, "p1").locator();
        let label = resolve_label(Some(&locator), &candidates, |f| f.name.as_deref());
        assert_eq!(label, PLACEHOLDER);
    }
}
