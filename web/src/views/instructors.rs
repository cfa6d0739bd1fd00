use dioxus::prelude::*;
use serde_json::{Map, Value};
use types::{Instructor, InstructorFields};
use ui::{Column, DataTable, DeleteConfirm, EntityDialog, FieldDef, SectionHeader, ViewState};

use crate::use_notifier;
use crate::views::initial_data;

#[component]
pub fn Instructors() -> Element {
    let mut instructors = use_signal(Vec::<Instructor>::new);
    let mut state = use_signal(|| ViewState::<Instructor>::Loading);
    let mut notifier = use_notifier();

    let load = move || {
        spawn(async move {
            state.set(ViewState::Loading);
            match api::list_instructors().await {
                Ok(list) => instructors.set(list),
                Err(error) => {
                    tracing::error!(%error, "failed to load instructors");
                    notifier.error("Fehler beim Laden der Dozenten");
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

            let fields = match serde_json::from_value::<InstructorFields>(Value::Object(payload)) {
                Ok(fields) => fields,
                Err(error) => {
                    tracing::error!(%error, "failed to decode instructor form payload");
                    notifier.error("Fehler beim Speichern");
                    state.set(ViewState::Dialog { edit, busy: false });
                    return;
                }
            };

            let result = match &edit {
                Some(instructor) => api::update_instructor(instructor.record_id.clone(), fields)
                    .await
                    .map(|_| ()),
                None => api::create_instructor(fields).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    notifier.success(if edit.is_some() {
                        "Dozent aktualisiert"
                    } else {
                        "Dozent erstellt"
                    });
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to save instructor");
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

            match api::delete_instructor(target.record_id.clone()).await {
                Ok(()) => {
                    notifier.success("Dozent gelöscht");
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to delete instructor");
                    notifier.error("Fehler beim Löschen");
                    state.set(ViewState::Confirm {
                        target,
                        busy: false,
                    });
                }
            }
        });
    };

    let fields = vec![
        FieldDef::text("name", "Name").required(),
        FieldDef::email("email", "E-Mail"),
        FieldDef::text("telefon", "Telefon"),
        FieldDef::text("fachgebiet", "Fachgebiet"),
    ];

    let columns = vec![
        Column::new(
            "Name",
            Callback::new(|instructor: Instructor| {
                let name = instructor.fields.name.unwrap_or_default();
                rsx! {
                    span { class: "cell-strong", "{name}" }
                }
            }),
        ),
        Column::text("Fachgebiet", |instructor: &Instructor| {
            instructor.fields.specialty.clone()
        }),
        Column::text("E-Mail", |instructor: &Instructor| {
            instructor.fields.email.clone()
        }),
        Column::text("Telefon", |instructor: &Instructor| {
            instructor.fields.phone.clone()
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
                title: "Dozenten",
                description: "Lehrende verwalten",
                count: instructors.read().len(),
                add_label: "Neuer Dozent",
                on_add: move |_| state.set(ViewState::Dialog { edit: None, busy: false }),
            }
            div { class: "card",
                DataTable {
                    rows: instructors.read().clone(),
                    columns,
                    loading,
                    empty_text: "Noch keine Dozenten vorhanden.",
                    row_key: Callback::new(|instructor: Instructor| instructor.record_id),
                    on_edit: move |instructor| state.set(ViewState::Dialog { edit: Some(instructor), busy: false }),
                    on_delete: move |instructor| state.set(ViewState::Confirm { target: instructor, busy: false }),
                }
            }
            if let Some((edit, busy)) = dialog {
                {
                    let title = if edit.is_some() { "Dozent bearbeiten" } else { "Neuer Dozent" };
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
                    label: target.fields.name.clone().unwrap_or_default(),
                    busy,
                    on_close: move |_| state.set(ViewState::Idle),
                    on_confirm,
                }
            }
        }
    }
}
