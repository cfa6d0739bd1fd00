use dioxus::prelude::*;

/// Header above an entity table: title, optional description, record count
/// badge and the add button that opens the create dialog.
#[component]
pub fn SectionHeader(
    title: String,
    description: Option<String>,
    count: Option<usize>,
    add_label: String,
    on_add: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "section-header",
            div { class: "section-header-text",
                div { class: "section-header-title-row",
                    h2 { class: "section-title", "{title}" }
                    if let Some(count) = count {
                        span { class: "count-badge", "{count}" }
                    }
                }
                if let Some(description) = &description {
                    p { class: "section-description", "{description}" }
                }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_add.call(()),
                "+ {add_label}"
            }
        }
    }
}
