use std::collections::BTreeMap;

use dioxus::prelude::*;
use serde_json::{Map, Value};

/// One option of a select field.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Date,
    TextArea,
    Select(Vec<SelectOption>),
    Boolean,
}

/// Declarative field descriptor; an entity form is a list of these.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDef {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    pub fn select(name: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Boolean)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// What an input holds before coercion: text for everything except toggles.
#[derive(Clone, Debug, PartialEq)]
enum FormValue {
    Text(String),
    Bool(bool),
}

impl FormValue {
    fn is_empty(&self) -> bool {
        match self {
            FormValue::Text(text) => text.trim().is_empty(),
            FormValue::Bool(_) => false,
        }
    }
}

type FormValues = BTreeMap<String, FormValue>;

/// Initial form state: every declared field seeded from the record being
/// edited, or the kind's empty value when absent (create mode seeds all
/// fields empty).
fn seed_values(fields: &[FieldDef], initial: Option<&Map<String, Value>>) -> FormValues {
    fields
        .iter()
        .map(|field| {
            let value = initial.and_then(|map| map.get(field.name));
            let seeded = match (&field.kind, value) {
                (FieldKind::Boolean, Some(Value::Bool(paid))) => FormValue::Bool(*paid),
                (FieldKind::Boolean, _) => FormValue::Bool(false),
                (_, Some(Value::String(text))) => FormValue::Text(text.clone()),
                (_, Some(Value::Number(number))) => FormValue::Text(number.to_string()),
                (_, Some(Value::Bool(b))) => FormValue::Text(b.to_string()),
                _ => FormValue::Text(String::new()),
            };
            (field.name.to_string(), seeded)
        })
        .collect()
}

/// Names of required fields the user left empty. A non-empty result blocks
/// submission.
fn missing_required(fields: &[FieldDef], values: &FormValues) -> Vec<String> {
    fields
        .iter()
        .filter(|field| field.required)
        .filter(|field| values.get(field.name).is_none_or(FormValue::is_empty))
        .map(|field| field.name.to_string())
        .collect()
}

/// Per-kind coercion into the payload handed to the save handler. Empty
/// values are dropped entirely, so the typed field structs see `None`; only
/// declared fields appear.
fn clean_payload(fields: &[FieldDef], values: &FormValues) -> Map<String, Value> {
    let mut payload = Map::new();

    for field in fields {
        let Some(value) = values.get(field.name) else {
            continue;
        };
        let cleaned = match (&field.kind, value) {
            (FieldKind::Number, FormValue::Text(raw)) => parse_number(raw),
            (FieldKind::Number, FormValue::Bool(_)) => None,
            (FieldKind::Boolean, value) => Some(Value::Bool(as_bool(value))),
            (_, FormValue::Text(raw)) => {
                (!raw.is_empty()).then(|| Value::String(raw.clone()))
            }
            (_, FormValue::Bool(b)) => Some(Value::Bool(*b)),
        };
        if let Some(cleaned) = cleaned {
            payload.insert(field.name.to_string(), cleaned);
        }
    }

    payload
}

fn parse_number(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Value::Number(int.into()));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}

fn as_bool(value: &FormValue) -> bool {
    match value {
        FormValue::Bool(b) => *b,
        FormValue::Text(text) => text == "true",
    }
}

/// Modal create/edit form driven by a field list. `initial` switches the
/// dialog into edit mode. Submission validates required fields, coerces the
/// values per kind and hands the cleaned payload to `on_save`; the dialog
/// stays open until the caller closes it.
#[component]
pub fn EntityDialog(
    title: String,
    fields: Vec<FieldDef>,
    #[props(!optional)] initial: Option<Map<String, Value>>,
    busy: bool,
    on_close: EventHandler<()>,
    on_save: EventHandler<Map<String, Value>>,
) -> Element {
    let seeded = seed_values(&fields, initial.as_ref());
    let values = use_signal(move || seeded);
    let mut errors = use_signal(Vec::<String>::new);

    let submit = {
        let fields = fields.clone();
        move |_| {
            let missing = missing_required(&fields, &values.read());
            if !missing.is_empty() {
                errors.set(missing);
                return;
            }
            errors.set(Vec::new());
            on_save.call(clean_payload(&fields, &values.read()));
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                if !busy {
                    on_close.call(());
                }
            },
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if !busy {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body",
                    for field in fields.clone() {
                        FieldInput { key: "{field.name}", field, values, errors }
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
                        class: "btn btn-primary",
                        disabled: busy,
                        onclick: submit,
                        if busy { "Speichern…" } else { "Speichern" }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(field: FieldDef, values: Signal<FormValues>, errors: Signal<Vec<String>>) -> Element {
    let name = field.name;
    let text = match values.read().get(name) {
        Some(FormValue::Text(text)) => text.clone(),
        _ => String::new(),
    };
    let checked = matches!(values.read().get(name), Some(FormValue::Bool(true)));
    let has_error = errors.read().iter().any(|missing| missing == name);

    let control = match &field.kind {
        FieldKind::TextArea => rsx! {
            textarea {
                id: "{name}",
                class: "form-input",
                rows: "3",
                value: "{text}",
                oninput: move |e| {
                    values.write().insert(name.to_string(), FormValue::Text(e.value()));
                },
            }
        },
        FieldKind::Boolean => rsx! {
            label { class: "checkbox-label",
                input {
                    id: "{name}",
                    r#type: "checkbox",
                    checked,
                    onchange: move |e| {
                        values.write().insert(name.to_string(), FormValue::Bool(e.checked()));
                    },
                }
                span { if checked { "Ja" } else { "Nein" } }
            }
        },
        FieldKind::Select(options) => rsx! {
            select {
                id: "{name}",
                class: "form-input",
                value: "{text}",
                onchange: move |e| {
                    values.write().insert(name.to_string(), FormValue::Text(e.value()));
                },
                option { value: "", "{field.label} wählen…" }
                for opt in options.clone() {
                    option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                }
            }
        },
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            rsx! {
                input {
                    id: "{name}",
                    class: if has_error { "form-input form-input-error" } else { "form-input" },
                    r#type: input_type,
                    step: if matches!(kind, FieldKind::Number) { "any" },
                    value: "{text}",
                    oninput: move |e| {
                        values.write().insert(name.to_string(), FormValue::Text(e.value()));
                    },
                }
            }
        }
    };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{name}",
                "{field.label}"
                if field.required {
                    span { class: "form-required", " *" }
                }
            }
            {control}
            if has_error {
                p { class: "form-error", "Pflichtfeld" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enrollment_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::select("teilnehmer", "Teilnehmer", Vec::new()).required(),
            FieldDef::select("kurs", "Kurs", Vec::new()).required(),
            FieldDef::date("anmeldedatum", "Anmeldedatum"),
            FieldDef::boolean("bezahlt", "Bezahlt"),
        ]
    }

    fn room_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("raumname", "Raumname").required(),
            FieldDef::text("gebaeude", "Gebäude"),
            FieldDef::number("kapazitaet", "Kapazität (Personen)"),
        ]
    }

    #[test]
    fn empty_number_is_dropped_from_the_payload() {
        let fields = room_fields();
        let mut values = seed_values(&fields, None);
        values.insert("raumname".into(), FormValue::Text("Lab A".into()));
        values.insert("kapazitaet".into(), FormValue::Text("".into()));

        let payload = clean_payload(&fields, &values);
        assert_eq!(payload.get("raumname"), Some(&json!("Lab A")));
        assert!(!payload.contains_key("kapazitaet"));
        assert!(!payload.contains_key("gebaeude"));
    }

    #[test]
    fn numbers_parse_integer_first_then_decimal() {
        let fields = vec![
            FieldDef::number("kapazitaet", "Kapazität"),
            FieldDef::number("preis", "Preis"),
        ];
        let values = FormValues::from([
            ("kapazitaet".to_string(), FormValue::Text("42".into())),
            ("preis".to_string(), FormValue::Text("99.5".into())),
        ]);

        let payload = clean_payload(&fields, &values);
        assert_eq!(payload.get("kapazitaet"), Some(&json!(42)));
        assert_eq!(payload.get("preis"), Some(&json!(99.5)));
    }

    #[test]
    fn unparseable_number_is_dropped() {
        let fields = vec![FieldDef::number("kapazitaet", "Kapazität")];
        let values = FormValues::from([(
            "kapazitaet".to_string(),
            FormValue::Text("zwanzig".into()),
        )]);

        assert!(clean_payload(&fields, &values).is_empty());
    }

    #[test]
    fn booleans_coerce_strictly_and_are_always_present() {
        let fields = enrollment_fields();
        let mut values = seed_values(&fields, None);
        assert_eq!(values.get("bezahlt"), Some(&FormValue::Bool(false)));

        let payload = clean_payload(&fields, &values);
        assert_eq!(payload.get("bezahlt"), Some(&json!(false)));

        values.insert("bezahlt".into(), FormValue::Text("true".into()));
        let payload = clean_payload(&fields, &values);
        assert_eq!(payload.get("bezahlt"), Some(&json!(true)));
    }

    #[test]
    fn only_declared_fields_reach_the_payload() {
        let fields = room_fields();
        let mut values = seed_values(&fields, None);
        values.insert("raumname".into(), FormValue::Text("Lab A".into()));
        values.insert("unbekannt".into(), FormValue::Text("x".into()));

        assert!(!clean_payload(&fields, &values).contains_key("unbekannt"));
    }

    #[test]
    fn required_fields_block_submission_until_filled() {
        let fields = enrollment_fields();
        let mut values = seed_values(&fields, None);

        let missing = missing_required(&fields, &values);
        assert_eq!(missing, vec!["teilnehmer".to_string(), "kurs".to_string()]);

        values.insert("teilnehmer".into(), FormValue::Text("https://ref".into()));
        values.insert("kurs".into(), FormValue::Text("https://ref".into()));
        assert!(missing_required(&fields, &values).is_empty());
    }

    #[test]
    fn seeding_takes_values_from_the_edited_record() {
        let fields = room_fields();
        let initial = json!({ "raumname": "Lab A", "kapazitaet": 20 });
        let Value::Object(initial) = initial else {
            unreachable!()
        };

        let values = seed_values(&fields, Some(&initial));
        assert_eq!(values.get("raumname"), Some(&FormValue::Text("Lab A".into())));
        assert_eq!(values.get("kapazitaet"), Some(&FormValue::Text("20".into())));
        // gebaeude was absent on the record
        assert_eq!(values.get("gebaeude"), Some(&FormValue::Text(String::new())));
    }
}
