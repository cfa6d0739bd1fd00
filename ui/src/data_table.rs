use dioxus::prelude::*;
use types::PLACEHOLDER;

/// Column descriptor: a header plus a cell renderer.
#[derive(Clone, PartialEq)]
pub struct Column<T: Clone + PartialEq + 'static> {
    pub header: &'static str,
    pub render: Callback<T, Element>,
}

impl<T: Clone + PartialEq + 'static> Column<T> {
    pub fn new(header: &'static str, render: Callback<T, Element>) -> Self {
        Self { header, render }
    }

    /// Plain text column; an absent value renders as the placeholder.
    pub fn text(header: &'static str, value: impl Fn(&T) -> Option<String> + 'static) -> Self {
        Self {
            header,
            render: Callback::new(move |item: T| {
                let text = value(&item).unwrap_or_else(|| PLACEHOLDER.to_string());
                rsx! { "{text}" }
            }),
        }
    }
}

/// Generic record table with loading and empty states and per-row
/// edit/delete actions. Rendering only; all effects go through the
/// supplied handlers.
#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    loading: bool,
    empty_text: String,
    row_key: Callback<T, String>,
    on_edit: EventHandler<T>,
    on_delete: EventHandler<T>,
) -> Element {
    if loading {
        return rsx! {
            div { class: "table-skeleton",
                for i in 0..4 {
                    div { key: "{i}", class: "skeleton-row" }
                }
            }
        };
    }

    if rows.is_empty() {
        return rsx! {
            div { class: "empty-state",
                span { class: "empty-state-icon", "📭" }
                p { class: "empty-state-text", "{empty_text}" }
                p { class: "empty-state-hint",
                    "Klicken Sie auf „Neu“, um den ersten Eintrag zu erstellen."
                }
            }
        };
    }

    rsx! {
        div { class: "table-container",
            table {
                thead {
                    tr {
                        for column in &columns {
                            th { key: "{column.header}", "{column.header}" }
                        }
                        th { class: "actions-header", "Aktionen" }
                    }
                }
                tbody {
                    for row in rows {
                        {
                            let key = row_key.call(row.clone());
                            rsx! {
                                tr { key: "{key}",
                                    for column in &columns {
                                        td { key: "{column.header}", {column.render.call(row.clone())} }
                                    }
                                    td { class: "row-actions",
                                        button {
                                            class: "btn btn-ghost",
                                            title: "Bearbeiten",
                                            onclick: {
                                                let row = row.clone();
                                                move |_| on_edit.call(row.clone())
                                            },
                                            "✎"
                                        }
                                        button {
                                            class: "btn btn-ghost btn-ghost-danger",
                                            title: "Löschen",
                                            onclick: {
                                                let row = row.clone();
                                                move |_| on_delete.call(row.clone())
                                            },
                                            "🗑"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
