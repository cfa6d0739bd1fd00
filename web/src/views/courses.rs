use dioxus::prelude::*;
use serde_json::{Map, Value};
use types::{Collection, Course, CourseFields, Instructor, RecordRef, Room, resolve_label};
use ui::{Column, DataTable, DeleteConfirm, EntityDialog, FieldDef, SectionHeader, SelectOption, ViewState};

use crate::use_notifier;
use crate::views::initial_data;

#[component]
pub fn Courses() -> Element {
    let mut courses = use_signal(Vec::<Course>::new);
    let mut instructors = use_signal(Vec::<Instructor>::new);
    let mut rooms = use_signal(Vec::<Room>::new);
    let mut state = use_signal(|| ViewState::<Course>::Loading);
    let mut notifier = use_notifier();

    // Courses render references into both sibling collections, so all three
    // lists are fetched together and applied all-or-nothing.
    let load = move || {
        spawn(async move {
            state.set(ViewState::Loading);

            let (course_result, instructor_result, room_result) = futures::join!(
                api::list_courses(),
                api::list_instructors(),
                api::list_rooms(),
            );

            match (course_result, instructor_result, room_result) {
                (Ok(c), Ok(i), Ok(r)) => {
                    courses.set(c);
                    instructors.set(i);
                    rooms.set(r);
                }
                (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => {
                    tracing::error!(%error, "failed to load courses");
                    notifier.error("Fehler beim Laden der Kurse");
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

            let fields = match serde_json::from_value::<CourseFields>(Value::Object(payload)) {
                Ok(fields) => fields,
                Err(error) => {
                    tracing::error!(%error, "failed to decode course form payload");
                    notifier.error("Fehler beim Speichern");
                    state.set(ViewState::Dialog { edit, busy: false });
                    return;
                }
            };

            let result = match &edit {
                Some(course) => api::update_course(course.record_id.clone(), fields)
                    .await
                    .map(|_| ()),
                None => api::create_course(fields).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    notifier.success(if edit.is_some() {
                        "Kurs aktualisiert"
                    } else {
                        "Kurs erstellt"
                    });
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to save course");
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

            match api::delete_course(target.record_id.clone()).await {
                Ok(()) => {
                    notifier.success("Kurs gelöscht");
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to delete course");
                    notifier.error("Fehler beim Löschen");
                    state.set(ViewState::Confirm {
                        target,
                        busy: false,
                    });
                }
            }
        });
    };

    let instructor_options: Vec<SelectOption> = instructors
        .read()
        .iter()
        .map(|instructor| SelectOption {
            value: RecordRef::new(Collection::Instructors, instructor.record_id.clone()).locator(),
            label: instructor
                .fields
                .name
                .clone()
                .unwrap_or_else(|| instructor.record_id.clone()),
        })
        .collect();
    let room_options: Vec<SelectOption> = rooms
        .read()
        .iter()
        .map(|room| SelectOption {
            value: RecordRef::new(Collection::Rooms, room.record_id.clone()).locator(),
            label: room
                .fields
                .name
                .clone()
                .unwrap_or_else(|| room.record_id.clone()),
        })
        .collect();

    let fields = vec![
        FieldDef::text("titel", "Titel").required(),
        FieldDef::textarea("beschreibung", "Beschreibung"),
        FieldDef::date("startdatum", "Startdatum"),
        FieldDef::date("enddatum", "Enddatum"),
        FieldDef::number("max_teilnehmer", "Max. Teilnehmer"),
        FieldDef::number("preis", "Preis (€)"),
        FieldDef::select("dozent", "Dozent", instructor_options),
        FieldDef::select("raum", "Raum", room_options),
    ];

    let instructor_list = instructors.read().clone();
    let room_list = rooms.read().clone();
    let columns = vec![
        Column::new(
            "Titel",
            Callback::new(|course: Course| {
                let title = course.fields.title.unwrap_or_default();
                rsx! {
                    span { class: "cell-strong", "{title}" }
                }
            }),
        ),
        Column::text("Start", |course: &Course| course.fields.start_date.clone()),
        Column::text("Dozent", move |course: &Course| {
            Some(resolve_label(
                course.fields.instructor.as_deref(),
                &instructor_list,
                |f| f.name.as_deref(),
            ))
        }),
        Column::text("Raum", move |course: &Course| {
            Some(resolve_label(course.fields.room.as_deref(), &room_list, |f| {
                f.name.as_deref()
            }))
        }),
        Column::text("Preis", |course: &Course| {
            format_price(course.fields.price)
        }),
        Column::text("Max. TN", |course: &Course| {
            course.fields.max_participants.map(|max| max.to_string())
        }),
    ];

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

    rsx! {
        div {
            SectionHeader {
                title: "Kurse",
                description: "Alle Kurse verwalten",
                count: courses.read().len(),
                add_label: "Neuer Kurs",
                on_add: move |_| state.set(ViewState::Dialog { edit: None, busy: false }),
            }
            div { class: "card",
                DataTable {
                    rows: courses.read().clone(),
                    columns,
                    loading,
                    empty_text: "Noch keine Kurse vorhanden.",
                    row_key: Callback::new(|course: Course| course.record_id),
                    on_edit: move |course| state.set(ViewState::Dialog { edit: Some(course), busy: false }),
                    on_delete: move |course| state.set(ViewState::Confirm { target: course, busy: false }),
                }
            }
            if let Some((edit, busy)) = dialog {
                {
                    let title = if edit.is_some() { "Kurs bearbeiten" } else { "Neuer Kurs" };
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
            if let Some((target, busy)) = confirm {
                DeleteConfirm {
                    label: target.fields.title.clone().unwrap_or_default(),
                    busy,
                    on_close: move |_| state.set(ViewState::Idle),
                    on_confirm,
                }
            }
        }
    }
}

fn format_price(price: Option<f64>) -> Option<String> {
    price.map(|price| format!("{price:.2} €"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_renders_with_two_decimals() {
        assert_eq!(format_price(Some(99.5)).as_deref(), Some("99.50 €"));
        assert_eq!(format_price(Some(12.0)).as_deref(), Some("12.00 €"));
        assert_eq!(format_price(None), None);
    }
}
