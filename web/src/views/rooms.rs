use dioxus::prelude::*;
use serde_json::{Map, Value};
use types::{Room, RoomFields};
use ui::{Column, DataTable, DeleteConfirm, EntityDialog, FieldDef, SectionHeader, ViewState};

use crate::use_notifier;
use crate::views::initial_data;

#[component]
pub fn Rooms() -> Element {
    let mut rooms = use_signal(Vec::<Room>::new);
    let mut state = use_signal(|| ViewState::<Room>::Loading);
    let mut notifier = use_notifier();

    let load = move || {
        spawn(async move {
            state.set(ViewState::Loading);
            match api::list_rooms().await {
                Ok(list) => rooms.set(list),
                Err(error) => {
                    tracing::error!(%error, "failed to load rooms");
                    notifier.error("Fehler beim Laden der Räume");
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

            let fields = match serde_json::from_value::<RoomFields>(Value::Object(payload)) {
                Ok(fields) => fields,
                Err(error) => {
                    tracing::error!(%error, "failed to decode room form payload");
                    notifier.error("Fehler beim Speichern");
                    state.set(ViewState::Dialog { edit, busy: false });
                    return;
                }
            };

            let result = match &edit {
                Some(room) => api::update_room(room.record_id.clone(), fields)
                    .await
                    .map(|_| ()),
                None => api::create_room(fields).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    notifier.success(if edit.is_some() {
                        "Raum aktualisiert"
                    } else {
                        "Raum erstellt"
                    });
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to save room");
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

            match api::delete_room(target.record_id.clone()).await {
                Ok(()) => {
                    notifier.success("Raum gelöscht");
                    state.set(ViewState::Idle);
                    load();
                }
                Err(error) => {
                    tracing::error!(%error, "failed to delete room");
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
        FieldDef::text("raumname", "Raumname").required(),
        FieldDef::text("gebaeude", "Gebäude"),
        FieldDef::number("kapazitaet", "Kapazität (Personen)"),
    ];

    let columns = vec![
        Column::new(
            "Raumname",
            Callback::new(|room: Room| {
                let name = room.fields.name.unwrap_or_default();
                rsx! {
                    span { class: "cell-strong", "{name}" }
                }
            }),
        ),
        Column::text("Gebäude", |room: &Room| room.fields.building.clone()),
        Column::text("Kapazität", |room: &Room| {
            format_capacity(room.fields.capacity)
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
                title: "Räume",
                description: "Unterrichtsräume verwalten",
                count: rooms.read().len(),
                add_label: "Neuer Raum",
                on_add: move |_| state.set(ViewState::Dialog { edit: None, busy: false }),
            }
            div { class: "card",
                DataTable {
                    rows: rooms.read().clone(),
                    columns,
                    loading,
                    empty_text: "Noch keine Räume vorhanden.",
                    row_key: Callback::new(|room: Room| room.record_id),
                    on_edit: move |room| state.set(ViewState::Dialog { edit: Some(room), busy: false }),
                    on_delete: move |room| state.set(ViewState::Confirm { target: room, busy: false }),
                }
            }
            if let Some((edit, busy)) = dialog {
                {
                    let title = if edit.is_some() { "Raum bearbeiten" } else { "Neuer Raum" };
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

fn format_capacity(capacity: Option<i64>) -> Option<String> {
    capacity.map(|capacity| format!("{capacity} Pers."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_renders_with_unit() {
        assert_eq!(format_capacity(Some(20)).as_deref(), Some("20 Pers."));
        assert_eq!(format_capacity(None), None);
    }
}
