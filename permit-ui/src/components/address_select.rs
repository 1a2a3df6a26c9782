//! Address input with geocoder suggestions.

use crate::state::Services;
use dioxus::prelude::*;
use permit_core::jurisdiction::AddressOption;
use permit_core::AddressSelection;

#[derive(Props, Clone, PartialEq)]
pub struct AddressSelectProps {
    /// Currently selected address, if any
    pub value: Option<AddressSelection>,
    /// Called with the new selection; `None` when the field is cleared
    pub on_change: EventHandler<Option<AddressSelection>>,
}

/// Text input that offers address suggestions and reports the chosen value.
///
/// Submitting the typed text as-is (even when empty) is a valid selection:
/// the geocoder then decides whether it matches a jurisdiction.
#[component]
pub fn AddressSelect(props: AddressSelectProps) -> Element {
    let services = use_context::<Services>();
    let mut query = use_signal(String::new);
    let mut options = use_signal(Vec::<AddressOption>::new);
    let on_change = props.on_change;

    let geocoder = services.geocoder.clone();
    let on_input = move |evt: Event<FormData>| {
        let text = evt.value();
        query.set(text.clone());
        let lookup = geocoder.fetch_site_options(&text);
        spawn(async move {
            match lookup.await {
                Ok(found) => {
                    // Typing moved on while this request was in flight.
                    if *query.peek() == text {
                        options.set(found);
                    }
                }
                Err(e) => {
                    log::warn!("Failed to load address suggestions: {}", e);
                    options.set(Vec::new());
                }
            }
        });
    };

    let mut pick = move |option: AddressOption| {
        query.set(option.label.clone());
        options.set(Vec::new());
        on_change.call(Some(option.selection()));
    };

    let use_typed = move |_: MouseEvent| {
        options.set(Vec::new());
        on_change.call(Some(AddressSelection::new(query())));
    };

    let clear = move |_: MouseEvent| {
        query.set(String::new());
        options.set(Vec::new());
        on_change.call(None);
    };

    let suggestions: Vec<(String, AddressOption)> = options
        .read()
        .iter()
        .map(|option| (option.label.clone(), option.clone()))
        .collect();
    let selected = props.value.map(|v| v.into_inner());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            div {
                style: "display: flex; gap: 8px;",
                input {
                    r#type: "text",
                    aria_label: "Project address",
                    placeholder: "Start typing an address",
                    value: "{query}",
                    style: "flex: 1; padding: 8px;",
                    oninput: on_input,
                }
                button { r#type: "button", onclick: use_typed, "Search" }
                button { r#type: "button", onclick: clear, "Clear" }
            }
            if !suggestions.is_empty() {
                ul {
                    role: "listbox",
                    style: "list-style: none; margin: 0; padding: 0; border: 1px solid #DDD; border-radius: 4px;",
                    for (label, option) in suggestions {
                        li {
                            key: "{label}",
                            button {
                                r#type: "button",
                                style: "width: 100%; text-align: left; padding: 6px 8px; background: none; border: none;",
                                onclick: move |_| pick(option.clone()),
                                "{label}"
                            }
                        }
                    }
                }
            }
            if let Some(selected) = selected {
                p {
                    style: "margin: 0; font-size: 12px; color: #606060;",
                    "Selected: {selected}"
                }
            }
        }
    }
}
