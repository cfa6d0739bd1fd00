use dioxus::prelude::*;

/// Blocking yes/no gate before a destructive action. While `busy`, both
/// actions are disabled; the caller closes the dialog after the confirm
/// handler settles.
#[component]
pub fn DeleteConfirm(
    label: String,
    busy: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                if !busy {
                    on_close.call(());
                }
            },
            div {
                class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Eintrag löschen?" }
                }
                div { class: "modal-body",
                    p {
                        "Soll "
                        strong { "{label}" }
                        " wirklich gelöscht werden? Diese Aktion kann nicht rückgängig gemacht werden."
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Abbrechen"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Löschen…" } else { "Löschen" }
                    }
                }
            }
        }
    }
}
