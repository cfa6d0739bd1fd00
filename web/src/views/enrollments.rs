use dioxus::prelude::*;
use serde_json::{Map, Value};
use types::{Collection, Course, Enrollment, EnrollmentFields, Participant, RecordRef, resolve_label};
use ui::{Column, DataTable, DeleteConfirm, EntityDialog, FieldDef, SectionHeader, SelectOption, ViewState};

use crate::use_notifier;
use crate::views::initial_data;

#[component]
pub fn Enrollments() -> Element {
    let mut enrollments = use_signal(Vec::<Enrollment>::new);
    let mut participants = use_signal(Vec::<Participant>::new);
    let mut courses = use_signal(Vec::<Course>::new);
    let mut state = use_signal(|| ViewState::<Enrollment>::Loading);
    let mut notifier = use_notifier();

    // Enrollments reference participants and courses, so all three lists are
    // fetched together and applied all-or-nothing.
    let load = move || {
        spawn(async move {
            state.set(ViewState::Loading);

            let (enrollment_result, participant_result, course_result) = futures::join!(
                api::list_enrollments(),
                api::list_participants(),
                api::list_courses(),
            );

            match (enrollment_result, participant_result, course_result) {
                (Ok(e), Ok(p), Ok(c)) => {
                    enrollments.set(e);
                    participants.set(p);
                    courses.set(c);
                }
                (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => {
                    tracing::error!(%error, "failed to load enrollments");
                    notifier.error("Fehler beim Laden der Anmeldungen");
                }
            }
            state.set(ViewState::Idle);
        });
    };

    use_effect(move || {
        load();
    });

    let on_save = move |payload: Map<String, Value>| {
        let edit = match &*state.read() {
            ViewState::Dialog { edit, .. } => edit.clone(),
            _ => return,
        };
        spawn(async move {
            state.set(ViewState::Dialog {
                edit: edit.clone(),
                busy: true,
            });

            // A new enrollment without an explicit date is dated today.
            let payload = if edit.is_none() {
                with_default_date(payload, &today())
            } else {
                payload
            };

            let fields = match serde_json::from_value::<EnrollmentFields>(Value::Object(payload)) {
                Ok(fields) => fields,
                Err(error) => {
                    tracing::error!(%error, "failed to decode enrollment form payload");
                    notifier.error("Fehler beim Speichern");
                    state.set(ViewState::Dialog { edit, busy: false });
                    return;
                }
            };

            let result = match &edit {
                Some(enrollment) => api::update_enrollment(enrollment.record_id.clone(), fields)
                    .await
                    .map(|_| ()),
                None => api::create_enrollment(fields).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    notifier.success(if edit.is_some() {
                        "Anmeldung aktualisiert"
                    } else {
                        "Anmeldung erstellt"
                    });
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to save enrollment");
                    notifier.error("Fehler beim Speichern");
                    state.set(ViewState::Dialog { edit, busy: false });
                }
            }
        });
    };

    let on_confirm = move |_| {
        let target = match &*state.read() {
            ViewState::Confirm { target, .. } => target.clone(),
            _ => return,
        };
        spawn(async move {
            state.set(ViewState::Confirm {
                target: target.clone(),
                busy: true,
            });

            match api::delete_enrollment(target.record_id.clone()).await {
                Ok(()) => {
                    notifier.success("Anmeldung gelöscht");
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to delete enrollment");
                    notifier.error("Fehler beim Löschen");
                    state.set(ViewState::Confirm {
                        target,
                        busy: false,
                    });
                }
            }
        });
    };

    let participant_options: Vec<SelectOption> = participants
        .read()
        .iter()
        .map(|participant| SelectOption {
            value: RecordRef::new(Collection::Participants, participant.record_id.clone())
                .locator(),
            label: participant
                .fields
                .name
                .clone()
                .unwrap_or_else(|| participant.record_id.clone()),
        })
        .collect();
    let course_options: Vec<SelectOption> = courses
        .read()
        .iter()
        .map(|course| SelectOption {
            value: RecordRef::new(Collection::Courses, course.record_id.clone()).locator(),
            label: course
                .fields
                .title
                .clone()
                .unwrap_or_else(|| course.record_id.clone()),
        })
        .collect();

    let fields = vec![
        FieldDef::select("teilnehmer", "Teilnehmer", participant_options).required(),
        FieldDef::select("kurs", "Kurs", course_options).required(),
        FieldDef::date("anmeldedatum", "Anmeldedatum"),
        FieldDef::boolean("bezahlt", "Bezahlt"),
    ];

    let participant_list = participants.read().clone();
    let course_list = courses.read().clone();
    let columns = vec![
        Column::new("Teilnehmer", {
            let participant_list = participant_list.clone();
            Callback::new(move |enrollment: Enrollment| {
                let name = resolve_label(
                    enrollment.fields.participant.as_deref(),
                    &participant_list,
                    |f| f.name.as_deref(),
                );
                rsx! {
                    span { class: "cell-strong", "{name}" }
                }
            })
        }),
        Column::text("Kurs", move |enrollment: &Enrollment| {
            Some(resolve_label(
                enrollment.fields.course.as_deref(),
                &course_list,
                |f| f.title.as_deref(),
            ))
        }),
        Column::text("Anmeldedatum", |enrollment: &Enrollment| {
            enrollment.fields.date.clone()
        }),
        Column::new(
            "Bezahlt",
            Callback::new(|enrollment: Enrollment| {
                let paid = enrollment.fields.paid.unwrap_or(false);
                let class = if paid {
                    "badge badge-paid"
                } else {
                    "badge badge-unpaid"
                };
                rsx! {
                    span { class: "{class}", {paid_label(enrollment.fields.paid)} }
                }
            }),
        ),
    ];

    let (paid, unpaid) = paid_counts(&enrollments.read());

    let snapshot = state.read().clone();
    let loading = snapshot.is_loading();
    let dialog = match &snapshot {
        ViewState::Dialog { edit, busy } => Some((edit.clone(), *busy)),
        _ => None,
    };
    let confirm = match &snapshot {
        ViewState::Confirm { target, busy } => Some((target.clone(), *busy)),
        _ => None,
    };
    let confirm_label = confirm.as_ref().map(|(target, _)| {
        format!(
            "Anmeldung von {}",
            resolve_label(target.fields.participant.as_deref(), &participant_list, |f| {
                f.name.as_deref()
            })
        )
    });

    rsx! {
        div {
            SectionHeader {
                title: "Anmeldungen",
                description: "Kursbuchungen verwalten",
                count: enrollments.read().len(),
                add_label: "Neue Anmeldung",
                on_add: move |_| state.set(ViewState::Dialog { edit: None, busy: false }),
            }
            if !enrollments.read().is_empty() {
                div { class: "summary-row",
                    div { class: "badge badge-paid summary-badge", "{paid} bezahlt" }
                    div { class: "badge badge-unpaid summary-badge", "{unpaid} ausstehend" }
                }
            }
            div { class: "card",
                DataTable {
                    rows: enrollments.read().clone(),
                    columns,
                    loading,
                    empty_text: "Noch keine Anmeldungen vorhanden.",
                    row_key: Callback::new(|enrollment: Enrollment| enrollment.record_id),
                    on_edit: move |enrollment| state.set(ViewState::Dialog { edit: Some(enrollment), busy: false }),
                    on_delete: move |enrollment| state.set(ViewState::Confirm { target: enrollment, busy: false }),
                }
            }
            if let Some((edit, busy)) = dialog {
                {
                    let title = if edit.is_some() { "Anmeldung bearbeiten" } else { "Neue Anmeldung" };
                    rsx! {
                        EntityDialog {
                            title: "{title}",
                            fields,
                            initial: edit.as_ref().and_then(initial_data),
                            busy,
                            on_close: move |_| state.set(ViewState::Idle),
                            on_save,
                        }
                    }
                }
            }
            if let Some((_, busy)) = confirm {
                DeleteConfirm {
                    label: confirm_label.unwrap_or_default(),
                    busy,
                    on_close: move |_| state.set(ViewState::Idle),
                    on_confirm,
                }
            }
        }
    }
}

fn today() -> String {
    jiff::Zoned::now().date().to_string()
}

/// Insert today's date for a create payload that omitted it.
fn with_default_date(mut payload: Map<String, Value>, today: &str) -> Map<String, Value> {
    payload
        .entry("anmeldedatum")
        .or_insert_with(|| Value::String(today.to_string()));
    payload
}

fn paid_counts(enrollments: &[Enrollment]) -> (usize, usize) {
    let paid = enrollments
        .iter()
        .filter(|enrollment| enrollment.fields.paid.unwrap_or(false))
        .count();
    (paid, enrollments.len() - paid)
}

fn paid_label(paid: Option<bool>) -> &'static str {
    if paid.unwrap_or(false) { "Ja" } else { "Nein" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use types::Record;

    fn enrollment(paid: Option<bool>) -> Enrollment {
        Record {
            record_id: "e1".to_string(),
            fields: EnrollmentFields {
                paid,
                ..Default::default()
            },
        }
    }

    #[test]
    fn missing_date_defaults_to_today() {
        let payload = Map::new();
        let payload = with_default_date(payload, "2026-08-06");
        assert_eq!(payload.get("anmeldedatum"), Some(&json!("2026-08-06")));
    }

    #[test]
    fn explicit_date_is_kept() {
        let mut payload = Map::new();
        payload.insert("anmeldedatum".into(), json!("2026-01-15"));
        let payload = with_default_date(payload, "2026-08-06");
        assert_eq!(payload.get("anmeldedatum"), Some(&json!("2026-01-15")));
    }

    #[test]
    fn paid_and_unpaid_counts_partition_the_list() {
        let list = vec![
            enrollment(Some(true)),
            enrollment(Some(false)),
            enrollment(None),
            enrollment(Some(true)),
        ];
        assert_eq!(paid_counts(&list), (2, 2));
        assert_eq!(paid_counts(&[]), (0, 0));
    }

    #[test]
    fn paid_badge_labels() {
        assert_eq!(paid_label(Some(true)), "Ja");
        assert_eq!(paid_label(Some(false)), "Nein");
        assert_eq!(paid_label(None), "Nein");
    }
}
