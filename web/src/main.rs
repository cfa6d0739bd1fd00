use dioxus::prelude::*;

mod views;

use views::{Courses, Enrollments, Instructors, Participants, Rooms};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Courses {},
        #[route("/dozenten")]
        Instructors {},
        #[route("/teilnehmer")]
        Participants {},
        #[route("/raeume")]
        Rooms {},
        #[route("/anmeldungen")]
        Enrollments {},
}

fn main() {
    #[cfg(feature = "server")]
    server::init_tracing();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "KursManager" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A one-shot notification; load/save/delete outcomes each produce exactly
/// one of these.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Global notification state - use `use_notifier()` to access
#[derive(Clone, Copy)]
pub struct Notifier(Signal<Option<Toast>>);

impl Notifier {
    pub fn success(&mut self, message: impl Into<String>) {
        self.0.set(Some(Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.0.set(Some(Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global notifier for raising/clearing toasts
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

#[component]
fn ToastBanner() -> Element {
    let mut notifier = use_context::<Notifier>();
    let toast = notifier.0.read().clone();

    match toast {
        Some(toast) => {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            rsx! {
                div { class: "{class}",
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| notifier.clear(),
                        "×"
                    }
                }
            }
        }
        None => rsx! {},
    }
}

#[component]
fn NavLink(to: Route, label: String, desc: String) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            span { class: "nav-label", "{label}" }
            span { class: "nav-desc", "{desc}" }
        }
    }
}

#[component]
fn AppLayout() -> Element {
    use_context_provider(|| Notifier(Signal::new(None)));

    rsx! {
        div { class: "app-layout",
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "KursManager" }
                    span { class: "sidebar-tagline", "Kursverwaltung" }
                }
                nav { class: "sidebar-nav",
                    p { class: "sidebar-nav-label", "Verwaltung" }
                    NavLink { to: Route::Courses {}, label: "Kurse", desc: "Kursverwaltung" }
                    NavLink { to: Route::Instructors {}, label: "Dozenten", desc: "Lehrende" }
                    NavLink { to: Route::Participants {}, label: "Teilnehmer", desc: "Angemeldete" }
                    NavLink { to: Route::Rooms {}, label: "Räume", desc: "Unterrichtsräume" }
                    NavLink { to: Route::Enrollments {}, label: "Anmeldungen", desc: "Buchungen" }
                }
                div { class: "sidebar-footer", "Alle Daten werden sicher gespeichert" }
            }
            // Main content
            main { class: "main-content",
                ToastBanner {}
                Outlet::<Route> {}
            }
        }
    }
}
