use dioxus::prelude::*;
use serde_json::{Map, Value};
use types::{Participant, ParticipantFields};
use ui::{Column, DataTable, DeleteConfirm, EntityDialog, FieldDef, SectionHeader, ViewState};

use crate::use_notifier;
use crate::views::initial_data;

#[component]
pub fn Participants() -> Element {
    let mut participants = use_signal(Vec::<Participant>::new);
    let mut state = use_signal(|| ViewState::<Participant>::Loading);
    let mut notifier = use_notifier();

    let load = move || {
        spawn(async move {
            state.set(ViewState::Loading);
            match api::list_participants().await {
                Ok(list) => participants.set(list),
                Err(error) => {
                    tracing::error!(%error, "failed to load participants");
                    notifier.error("Fehler beim Laden der Teilnehmer");
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

            let fields = match serde_json::from_value::<ParticipantFields>(Value::Object(payload)) {
                Ok(fields) => fields,
                Err(error) => {
                    tracing::error!(%error, "failed to decode participant form payload");
                    notifier.error("Fehler beim Speichern");
                    state.set(ViewState::Dialog { edit, busy: false });
                    return;
                }
            };

            let result = match &edit {
                Some(participant) => api::update_participant(participant.record_id.clone(), fields)
                    .await
                    .map(|_| ()),
                None => api::create_participant(fields).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    notifier.success(if edit.is_some() {
                        "Teilnehmer aktualisiert"
                    } else {
                        "Teilnehmer erstellt"
                    });
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to save participant");
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

            match api::delete_participant(target.record_id.clone()).await {
                Ok(()) => {
                    notifier.success("Teilnehmer gelöscht");
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to delete participant");
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
        FieldDef::date("geburtsdatum", "Geburtsdatum"),
    ];

    let columns = vec![
        Column::new(
            "Name",
            Callback::new(|participant: Participant| {
                let name = participant.fields.name.unwrap_or_default();
                rsx! {
                    span { class: "cell-strong", "{name}" }
                }
            }),
        ),
        Column::text("E-Mail", |participant: &Participant| {
            participant.fields.email.clone()
        }),
        Column::text("Telefon", |participant: &Participant| {
            participant.fields.phone.clone()
        }),
        Column::text("Geburtsdatum", |participant: &Participant| {
            participant.fields.birth_date.clone()
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
                title: "Teilnehmer",
                description: "Angemeldete Personen verwalten",
                count: participants.read().len(),
                add_label: "Neuer Teilnehmer",
                on_add: move |_| state.set(ViewState::Dialog { edit: None, busy: false }),
            }
            div { class: "card",
                DataTable {
                    rows: participants.read().clone(),
                    columns,
                    loading,
                    empty_text: "Noch keine Teilnehmer vorhanden.",
                    row_key: Callback::new(|participant: Participant| participant.record_id),
                    on_edit: move |participant| state.set(ViewState::Dialog { edit: Some(participant), busy: false }),
                    on_delete: move |participant| state.set(ViewState::Confirm { target: participant, busy: false }),
                }
            }
            if let Some((edit, busy)) = dialog {
                {
                    let title = if edit.is_some() { "Teilnehmer bearbeiten" } else { "Neuer Teilnehmer" };
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
